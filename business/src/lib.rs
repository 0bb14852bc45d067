//! Headless core of the times table generator.
//!
//! Reads four bounds from a form, validates them and mounts the resulting
//! multiplication table into a grid sink. Nothing here depends on a UI
//! toolkit; the front end supplies [`InputField`], [`ErrorDisplay`] and
//! [`GridSink`] implementations.

mod bounds;
mod error;
mod form;
mod generator;
pub mod number;
mod page;
mod sink;
mod table;
mod validate;

pub use bounds::{BOUND_LIMIT, Bounds, RawBounds};
pub use error::ValidationError;
pub use form::BoundsForm;
pub use generator::{Outcome, Phase, TableGenerator};
pub use page::{Page, PageEvent};
pub use sink::{ErrorDisplay, GridSink, InputField, MemoryGrid};
pub use table::{Cell, Shade, Table, build_table, shade_for};
pub use validate::{parse_bounds, validate, validate_into};
