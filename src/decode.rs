use common::CodeError;
use prefixtree::CodeTree;

/// Decodes a bit sequence by walking the tree: 0 steps left, 1 steps right,
/// each leaf emits its symbol and the walk restarts at the root.
///
/// Bit values other than 0/1 and streams that end in the middle of a code
/// fail with [`CodeError::CorruptionDetected`].
pub fn decode_bits<S: Clone>(tree: &CodeTree<S>, bits: &[u8]) -> Result<Vec<S>, CodeError> {
    let mut output = Vec::new();

    // single-symbol alphabet: the lone leaf carries the one-bit code 0
    if let CodeTree::Leaf { symbol, .. } = tree {
        for &bit in bits {
            match bit {
                0 => output.push(symbol.clone()),
                1 => {
                    return Err(CodeError::CorruptionDetected(
                        "bit 1 has no code in a single-symbol alphabet".to_string(),
                    ))
                }
                other => {
                    return Err(CodeError::CorruptionDetected(format!(
                        "invalid bit value {}",
                        other
                    )))
                }
            }
        }
        return Ok(output);
    }

    let mut current = tree;
    for &bit in bits {
        current = match current {
            CodeTree::Internal { left, right, .. } => match bit {
                0 => left,
                1 => right,
                other => {
                    return Err(CodeError::CorruptionDetected(format!(
                        "invalid bit value {}",
                        other
                    )))
                }
            },
            // the walk restarts at the root right after emitting a symbol
            CodeTree::Leaf { .. } => unreachable!("walk never rests on a leaf"),
        };
        if let CodeTree::Leaf { symbol, .. } = current {
            output.push(symbol.clone());
            current = tree;
        }
    }

    if !std::ptr::eq(current, tree) {
        return Err(CodeError::CorruptionDetected(
            "bit stream ends inside a code".to_string(),
        ));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{count_bytes, count_symbols, HuffmanCode};

    #[test]
    fn test_round_trip_bytes() {
        let data = b"abracadabra";
        let huffman = HuffmanCode::from_weights(&count_bytes(data));
        let bits = huffman.encode(data).unwrap();
        assert_eq!(huffman.decode(&bits).unwrap(), data.to_vec());
    }

    #[test]
    fn test_round_trip_chars() {
        let text = "no two codes share a prefix";
        let huffman = HuffmanCode::from_weights(&count_symbols(text.chars()));
        let input: Vec<char> = text.chars().collect();
        let bits = huffman.encode(&input).unwrap();
        assert_eq!(huffman.decode(&bits).unwrap(), input);
    }

    #[test]
    fn test_truncated_stream_detected() {
        let huffman = HuffmanCode::from_weights(&count_bytes(b"aabbbcccc"));
        // codes here are c=0, a=10, b=11; dropping the last bit of 'b'
        // leaves the walk parked inside the tree
        let mut bits = huffman.encode(b"ab").unwrap();
        bits.pop();
        match huffman.decode(&bits) {
            Err(CodeError::CorruptionDetected(msg)) => {
                assert!(msg.contains("ends inside a code"));
            }
            other => panic!("expected CorruptionDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_bit_value_detected() {
        let huffman = HuffmanCode::from_weights(&count_bytes(b"aabb"));
        match huffman.decode(&[0, 2]) {
            Err(CodeError::CorruptionDetected(msg)) => {
                assert!(msg.contains("invalid bit value 2"));
            }
            other => panic!("expected CorruptionDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_single_symbol_round_trip() {
        let huffman = HuffmanCode::from_counts(vec![('x', 7_i64)]).unwrap();
        let bits = huffman.encode(&['x', 'x', 'x']).unwrap();
        assert_eq!(bits, vec![0, 0, 0]);
        assert_eq!(huffman.decode(&bits).unwrap(), vec!['x', 'x', 'x']);
        assert!(huffman.decode(&[0, 1]).is_err());
    }
}
