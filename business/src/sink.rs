//! Handles the generator is given at construction time.
//!
//! The generator never looks anything up by name; it is handed its four
//! input fields, an error display and a grid mount point. Each handle is a
//! small trait so the same flow drives the egui front end and the in-memory
//! doubles used by tests.

use crate::Cell;

/// A single-line text field the user types a bound into.
pub trait InputField {
    /// The current text of the field.
    fn value(&self) -> String;

    /// Clears the field back to its empty state.
    fn reset(&mut self);
}

impl InputField for String {
    fn value(&self) -> String {
        self.clone()
    }

    fn reset(&mut self) {
        self.clear();
    }
}

/// The text region that shows the validation message.
pub trait ErrorDisplay {
    /// Replaces the displayed message. An empty message clears the display.
    fn set_message(&mut self, message: &str);
}

impl ErrorDisplay for String {
    fn set_message(&mut self, message: &str) {
        self.clear();
        self.push_str(message);
    }
}

/// The mount point a generated table is attached to.
pub trait GridSink {
    /// Removes every previously appended row.
    fn clear(&mut self);

    /// Appends one row of cells below the existing rows.
    fn append_row(&mut self, cells: Vec<Cell>);
}

/// In-memory grid sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryGrid {
    rows: Vec<Vec<Cell>>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text of every cell, row by row.
    pub fn labels(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::label).collect())
            .collect()
    }
}

impl GridSink for MemoryGrid {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }
}
