//! Form validation.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. any field is the empty string: [`ValidationError::MissingInput`]
//! 2. any field does not convert to an integer: [`ValidationError::InvalidInput`]
//! 3. a minimum is larger than its maximum: [`ValidationError::MinExceedsMax`]
//! 4. any value is above [`BOUND_LIMIT`]: [`ValidationError::OutOfRange`]
//! 5. any value is below `-BOUND_LIMIT`: [`ValidationError::OutOfRange`]

use log::debug;

use crate::number::{is_integer, to_number};
use crate::{BOUND_LIMIT, Bounds, ErrorDisplay, RawBounds, ValidationError};

/// Validates raw field text into [`Bounds`].
pub fn parse_bounds(raw: &RawBounds) -> Result<Bounds, ValidationError> {
    // Compared untrimmed: whitespace-only text is a number (zero), not a missing value.
    if raw.fields().iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingInput);
    }

    let values = raw.fields().map(to_number);
    if !values.iter().all(|value| is_integer(*value)) {
        return Err(ValidationError::InvalidInput);
    }

    let [col_min, col_max, row_min, row_max] = values;
    if col_min > col_max || row_min > row_max {
        return Err(ValidationError::MinExceedsMax);
    }

    let limit = f64::from(BOUND_LIMIT);
    if values.iter().any(|value| *value > limit) {
        return Err(ValidationError::OutOfRange);
    }
    if values.iter().any(|value| *value < -limit) {
        return Err(ValidationError::OutOfRange);
    }

    // Every value is an integer within [-BOUND_LIMIT, BOUND_LIMIT] here.
    Ok(Bounds::new_unchecked(
        col_min as i32,
        col_max as i32,
        row_min as i32,
        row_max as i32,
    ))
}

/// Validates and writes the outcome to `display`.
///
/// On failure the display shows the error message; on success it is cleared.
pub fn validate_into<E: ErrorDisplay + ?Sized>(
    raw: &RawBounds,
    display: &mut E,
) -> Result<Bounds, ValidationError> {
    let result = parse_bounds(raw);
    match &result {
        Ok(bounds) => {
            debug!("bounds accepted: {bounds:?}");
            display.set_message("");
        }
        Err(err) => {
            debug!("bounds rejected: {err}");
            display.set_message(&err.to_string());
        }
    }
    result
}

/// Boolean form of [`validate_into`].
pub fn validate<E: ErrorDisplay + ?Sized>(raw: &RawBounds, display: &mut E) -> bool {
    validate_into(raw, display).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_bounds, validate};
    use crate::{RawBounds, ValidationError};

    fn parse(col_min: &str, col_max: &str, row_min: &str, row_max: &str) -> Result<(), ValidationError> {
        parse_bounds(&RawBounds::new(col_min, col_max, row_min, row_max)).map(|_| ())
    }

    #[test]
    fn test_missing_wins_over_everything() {
        assert_eq!(parse("", "abc", "60", "-60"), Err(ValidationError::MissingInput));
        assert_eq!(parse("1", "2", "3", ""), Err(ValidationError::MissingInput));
    }

    #[test]
    fn test_whitespace_only_is_zero() {
        let bounds = parse_bounds(&RawBounds::new(" ", "0", "0", "0")).expect("blank is zero");
        assert_eq!(bounds.col_min(), 0);
    }

    #[test]
    fn test_invalid_wins_over_ordering_and_range() {
        assert_eq!(parse("3.5", "1", "99", "2"), Err(ValidationError::InvalidInput));
        assert_eq!(parse("1", "abc", "1", "2"), Err(ValidationError::InvalidInput));
    }

    #[test]
    fn test_ordering_wins_over_range() {
        assert_eq!(parse("60", "55", "1", "2"), Err(ValidationError::MinExceedsMax));
    }

    #[test]
    fn test_range_both_directions() {
        assert_eq!(
            parse("1", "51", "1", "2"),
            Err(ValidationError::OutOfRange)
        );
        assert_eq!(
            parse("-51", "1", "1", "2"),
            Err(ValidationError::OutOfRange)
        );
    }

    #[test]
    fn test_integral_floats_are_accepted() {
        let bounds = parse_bounds(&RawBounds::new("1e1", "0x10", "-3.0", "+4"))
            .expect("integral spellings are valid");
        assert_eq!(bounds.col_min(), 10);
        assert_eq!(bounds.col_max(), 16);
        assert_eq!(bounds.row_min(), -3);
        assert_eq!(bounds.row_max(), 4);
    }

    #[test]
    fn test_validate_writes_and_clears_display() {
        let mut display = String::new();
        assert!(!validate(&RawBounds::new("", "", "", ""), &mut display));
        assert_eq!(display, "Missing Input(s)");

        assert!(validate(&RawBounds::new("1", "2", "3", "4"), &mut display));
        assert_eq!(display, "");
    }

    #[test]
    fn test_range_message_is_fixed() {
        let mut display = String::new();
        assert!(!validate(&RawBounds::new("1", "51", "1", "2"), &mut display));
        assert_eq!(display, "Enter Value between -50 to 50");
        assert!(!validate(&RawBounds::new("-1000", "1000", "1", "2"), &mut display));
        assert_eq!(display, "Enter Value between -50 to 50");
    }

    #[test]
    fn test_huge_values_are_out_of_range() {
        assert_eq!(
            parse("50000", "50000", "50000", "50000"),
            Err(ValidationError::OutOfRange)
        );
        assert_eq!(parse("-1e20", "1e20", "1", "2"), Err(ValidationError::OutOfRange));
    }
}
