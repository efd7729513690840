use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloudError {
    /// Tokenizer called with a start index outside the line or off a char boundary.
    #[error("invalid token position {position} for line of length {len}")]
    InvalidTokenPosition { position: usize, len: usize },
    #[error("empty word token")]
    EmptyToken,
    #[error("requested {requested} words but only {available} distinct words are available")]
    InsufficientData { requested: usize, available: usize },
    #[error("word count must not be negative (got {0})")]
    NegativeWordLimit(i64),
    #[error("invalid font range: min {min} must be below max {max}")]
    InvalidFontRange { min: u32, max: u32 },
    #[error("separator set must not be empty")]
    EmptySeparatorSet,
}
