//! Raw form input and the validated table bounds derived from it.

use std::ops::RangeInclusive;

use crate::ValidationError;

/// Largest absolute value accepted for any bound.
pub const BOUND_LIMIT: i32 = 50;

/// The four untouched field values, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBounds {
    pub col_min: String,
    pub col_max: String,
    pub row_min: String,
    pub row_max: String,
}

impl RawBounds {
    pub fn new(
        col_min: impl Into<String>,
        col_max: impl Into<String>,
        row_min: impl Into<String>,
        row_max: impl Into<String>,
    ) -> Self {
        Self {
            col_min: col_min.into(),
            col_max: col_max.into(),
            row_min: row_min.into(),
            row_max: row_max.into(),
        }
    }

    /// Field values in col-min, col-max, row-min, row-max order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.col_min, &self.col_max, &self.row_min, &self.row_max]
    }
}

/// Validated axis limits of a multiplication table.
///
/// Every value lies within `-BOUND_LIMIT..=BOUND_LIMIT` and each minimum is not
/// larger than its maximum. The only ways to obtain one are
/// [`Bounds::new`] and [`crate::parse_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    col_min: i32,
    col_max: i32,
    row_min: i32,
    row_max: i32,
}

impl Bounds {
    pub fn new(
        col_min: i32,
        col_max: i32,
        row_min: i32,
        row_max: i32,
    ) -> Result<Self, ValidationError> {
        if col_min > col_max || row_min > row_max {
            return Err(ValidationError::MinExceedsMax);
        }

        let in_range = [col_min, col_max, row_min, row_max]
            .iter()
            .all(|value| (-BOUND_LIMIT..=BOUND_LIMIT).contains(value));
        if !in_range {
            return Err(ValidationError::OutOfRange);
        }

        Ok(Self::new_unchecked(col_min, col_max, row_min, row_max))
    }

    pub(crate) fn new_unchecked(col_min: i32, col_max: i32, row_min: i32, row_max: i32) -> Self {
        Self {
            col_min,
            col_max,
            row_min,
            row_max,
        }
    }

    pub fn col_min(&self) -> i32 {
        self.col_min
    }

    pub fn col_max(&self) -> i32 {
        self.col_max
    }

    pub fn row_min(&self) -> i32 {
        self.row_min
    }

    pub fn row_max(&self) -> i32 {
        self.row_max
    }

    pub fn columns(&self) -> RangeInclusive<i32> {
        self.col_min..=self.col_max
    }

    pub fn rows(&self) -> RangeInclusive<i32> {
        self.row_min..=self.row_max
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, RawBounds};
    use crate::ValidationError;

    #[test]
    fn test_fields_keep_form_order() {
        let raw = RawBounds::new("1", "2", "3", "4");
        assert_eq!(raw.fields(), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_new_accepts_inclusive_limits() {
        let bounds = Bounds::new(-50, 50, -50, 50).expect("limits are inclusive");
        assert_eq!(bounds.columns().count(), 101);
        assert_eq!(bounds.rows().count(), 101);
    }

    #[test]
    fn test_new_rejects_inverted_axis() {
        assert_eq!(
            Bounds::new(5, 2, 1, 3),
            Err(ValidationError::MinExceedsMax)
        );
        assert_eq!(
            Bounds::new(1, 3, 4, 0),
            Err(ValidationError::MinExceedsMax)
        );
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Bounds::new(1, 51, 1, 3),
            Err(ValidationError::OutOfRange)
        );
        assert_eq!(
            Bounds::new(-51, 0, 1, 3),
            Err(ValidationError::OutOfRange)
        );
    }

    #[test]
    fn test_new_rejects_extreme_values() {
        assert_eq!(
            Bounds::new(i32::MIN, i32::MAX, 0, 0),
            Err(ValidationError::OutOfRange)
        );
        assert_eq!(
            Bounds::new(0, 0, 50_000, 50_000),
            Err(ValidationError::OutOfRange)
        );
    }
}
