use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// extract/peek was called on a heap with no logical elements
    #[error("extract on empty queue")]
    EmptyQueue,
    /// the caller supplied counts the builder cannot work with,
    /// rejected before construction begins
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
    /// the encode input contains a symbol absent from the code book
    #[error("symbol is not present in the code book")]
    UnknownSymbol,
    #[error("corruption detected: {0}")]
    CorruptionDetected(String),
}
