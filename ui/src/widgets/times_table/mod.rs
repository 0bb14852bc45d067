//! The rendered multiplication table.

mod cells;

use egui::{Frame, Margin, Response, ScrollArea, Stroke, Ui};

use crate::state::MountPoint;
use crate::utils::colors::COLOR_TABLE_BORDER;

/// Minimum width of a grid column so short products stay aligned.
const MIN_COL_WIDTH: f32 = 36.0;

/// Draws whatever the mount point currently holds.
///
/// An empty mount point draws nothing.
pub fn times_table(mount: &MountPoint, ui: &mut Ui) -> Response {
    if mount.is_empty() {
        return ui.allocate_response(egui::Vec2::ZERO, egui::Sense::hover());
    }

    Frame::NONE
        .stroke(Stroke::new(1.0, COLOR_TABLE_BORDER))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::both()
                .id_salt(("times_table_scroll", mount.generation()))
                .show(ui, |ui| {
                    egui::Grid::new(("times_table", mount.generation()))
                        .spacing([0.0, 0.0])
                        .min_col_width(MIN_COL_WIDTH)
                        .show(ui, |ui| {
                            for row in mount.rows() {
                                for cell in row {
                                    cells::render_cell(ui, cell);
                                }
                                ui.end_row();
                            }
                        });
                });
        })
        .response
}
