use crate::error::Result;

/// Validate structural integrity of a computed geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
