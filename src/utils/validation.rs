use crate::utils::error::Result;

/// Presence validation for decoded wire records. Implementations check
/// required fields only and return the first violation they hit.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
