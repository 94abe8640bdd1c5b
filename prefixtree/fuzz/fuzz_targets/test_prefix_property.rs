#![no_main]
use libfuzzer_sys::fuzz_target;

use prefixtree::{assert_prefix_free, build_tree, CodeBook};
use std::collections::BTreeMap;

fuzz_target!(|data: &[u8]| {
    let mut weights: BTreeMap<u8, u64> = BTreeMap::new();
    for byte in data {
        *weights.entry(*byte).or_insert(0) += 1;
    }
    if let Some(tree) = build_tree(&weights) {
        let book = CodeBook::from_tree(&tree);
        assert_prefix_free(&book);
    }
});
