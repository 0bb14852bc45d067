use crate::{InputField, RawBounds};

/// The four bound fields of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundsForm<F> {
    pub col_min: F,
    pub col_max: F,
    pub row_min: F,
    pub row_max: F,
}

impl<F: InputField> BoundsForm<F> {
    pub fn new(col_min: F, col_max: F, row_min: F, row_max: F) -> Self {
        Self {
            col_min,
            col_max,
            row_min,
            row_max,
        }
    }

    /// Snapshot of the current field text.
    pub fn read(&self) -> RawBounds {
        RawBounds::new(
            self.col_min.value(),
            self.col_max.value(),
            self.row_min.value(),
            self.row_max.value(),
        )
    }

    /// Clears all four fields.
    pub fn reset(&mut self) {
        self.col_min.reset();
        self.col_max.reset();
        self.row_min.reset();
        self.row_max.reset();
    }
}
