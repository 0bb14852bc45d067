//! Shared color constants for the UI.

use egui::Color32;

/// Red color for validation messages.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Fill for grey (same-parity) product cells.
pub const COLOR_GREY_CELL: Color32 = Color32::from_rgb(211, 211, 211);

/// Fill for row and column label cells.
pub const COLOR_HEADER_BG: Color32 = Color32::from_rgb(245, 245, 245);

/// Subtle border around the rendered table.
pub const COLOR_TABLE_BORDER: Color32 = Color32::from_rgb(200, 200, 200);

/// Dark text on the light header and grey fills, readable in both themes.
pub const COLOR_CELL_TEXT: Color32 = Color32::from_rgb(33, 37, 41);
