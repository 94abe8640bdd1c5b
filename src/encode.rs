use common::CodeError;
use prefixtree::CodeBook;

/// Encodes a symbol sequence by concatenating the code bits of each symbol.
///
/// A symbol without an entry in the book fails with
/// [`CodeError::UnknownSymbol`]; nothing is silently skipped.
pub fn encode_symbols<S: Ord + Clone>(book: &CodeBook<S>, input: &[S]) -> Result<Vec<u8>, CodeError> {
    let mut bits = Vec::new();
    for symbol in input {
        let code = book.get(symbol).ok_or(CodeError::UnknownSymbol)?;
        bits.extend_from_slice(code.bits());
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HuffmanCode;

    #[test]
    fn test_encode_concatenates_codes() {
        let huffman = HuffmanCode::from_counts(vec![('a', 1_i64), ('b', 2), ('c', 4)]).unwrap();
        let book = huffman.code_book();

        let mut expected = Vec::new();
        for symbol in &['a', 'b', 'c'] {
            expected.extend_from_slice(book.get(symbol).unwrap().bits());
        }
        assert_eq!(encode_symbols(book, &['a', 'b', 'c']).unwrap(), expected);
    }

    #[test]
    fn test_unknown_symbol_is_an_error() {
        let huffman = HuffmanCode::from_counts(vec![('a', 1_i64), ('b', 2)]).unwrap();
        let result = encode_symbols(huffman.code_book(), &['a', 'z']);
        assert_eq!(result, Err(CodeError::UnknownSymbol));
    }

    #[test]
    fn test_empty_input_encodes_to_nothing() {
        let huffman = HuffmanCode::from_counts(vec![('a', 1_i64), ('b', 2)]).unwrap();
        assert_eq!(
            encode_symbols::<char>(huffman.code_book(), &[]).unwrap(),
            Vec::<u8>::new()
        );
    }
}
