use thiserror::Error;

/// Reasons a set of form bounds is rejected.
///
/// The `Display` output is the exact message shown to the user, so callers
/// can write `err.to_string()` straight into the error display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing Input(s)")]
    MissingInput,
    #[error("Invalid Input(s)")]
    InvalidInput,
    #[error("Min Value is Larger than Max Value")]
    MinExceedsMax,
    #[error("Enter Value between -50 to 50")]
    OutOfRange,
}
