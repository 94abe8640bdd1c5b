#![no_main]
use libfuzzer_sys::fuzz_target;

use prefixtree::build_tree;
use std::collections::BTreeMap;

fuzz_target!(|data: &[u8]| {
    let mut weights: BTreeMap<u8, u64> = BTreeMap::new();
    for byte in data {
        *weights.entry(*byte).or_insert(0) += 1;
    }
    if let Some(tree) = build_tree(&weights) {
        assert_eq!(tree.weight(), data.len() as u64);
        assert_eq!(tree.leaves().len(), weights.len());
    }
});
