use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrenetError {
    /// Input rejected before any computation: too few points or a
    /// non-finite coordinate.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A computed frame violates the orthonormality invariants.
    #[error("Tolerance violation: {0}")]
    Tolerance(String),
}

impl FrenetError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, FrenetError>;
