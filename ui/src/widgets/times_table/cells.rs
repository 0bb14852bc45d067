//! Cell rendering for the times table grid.
//!
//! Every cell is a padded frame so header, grey and plain cells line up in
//! the grid regardless of their fill.

use egui::{Color32, Frame, Margin, RichText, Ui};
use timestable_business::{Cell, Shade};

use crate::utils::colors::{COLOR_CELL_TEXT, COLOR_GREY_CELL, COLOR_HEADER_BG};

/// Renders one grid cell with the fill that matches its kind.
#[inline]
pub fn render_cell(ui: &mut Ui, cell: &Cell) {
    match cell {
        Cell::Corner => render_header_cell(ui, ""),
        Cell::Header(_) => render_header_cell(ui, &cell.label()),
        Cell::Data {
            shade: Shade::Grey, ..
        } => render_data_cell(ui, &cell.label(), Some(COLOR_GREY_CELL)),
        Cell::Data {
            shade: Shade::Plain,
            ..
        } => render_data_cell(ui, &cell.label(), None),
    }
}

/// Renders a row or column label in bold on the header background.
#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    Frame::NONE
        .fill(COLOR_HEADER_BG)
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(label).strong().color(COLOR_CELL_TEXT));
        });
}

/// Renders a product, optionally on a filled background.
#[inline]
fn render_data_cell(ui: &mut Ui, label: &str, fill: Option<Color32>) {
    let frame = Frame::NONE.inner_margin(Margin::symmetric(8, 6));
    let frame = match fill {
        Some(fill) => frame.fill(fill),
        None => frame,
    };

    frame.show(ui, |ui| {
        let text = RichText::new(label).monospace();
        let text = if fill.is_some() {
            text.color(COLOR_CELL_TEXT)
        } else {
            text
        };
        ui.label(text);
    });
}
