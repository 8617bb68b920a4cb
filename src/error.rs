//! Error types

use crate::big_num_constants::MAX_MAG_WORDS;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("failed to allocate a buffer of {words} words")]
    AllocationFailure { words: usize },
    #[error("{} overflow: magnitude exceeds {max} words", direction(.negative), max = MAX_MAG_WORDS)]
    Overflow { negative: bool },
    #[error("division by zero")]
    DivisionByZero,
    #[error("malformed integer literal {input:?} at byte {index}")]
    MalformedInput { input: String, index: usize },
    #[error("packed header declares {declared} words but the buffer holds {actual}")]
    MalformedPacked { declared: usize, actual: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn direction(negative: &bool) -> &'static str {
    if *negative { "negative" } else { "positive" }
}

impl Error {
    pub(crate) fn malformed(input: &str, index: usize) -> Error {
        Error::MalformedInput { input: input.to_owned(), index }
    }

    /// Re-points an overflow at `negative`; other errors pass through.
    pub(crate) fn with_direction(self, negative: bool) -> Error {
        match self {
            Error::Overflow { .. } => Error::Overflow { negative },
            other => other,
        }
    }
}
