//! Form with the four table bounds and the submit button.

use egui::Ui;
use timestable_business::BoundsForm;

/// Text of the submit button.
pub const SUBMIT_LABEL: &str = "Generate";

/// Width of each bound text field.
const FIELD_WIDTH: f32 = 80.0;

/// Draws the bound fields and the submit button.
///
/// Returns `true` when the submit button was clicked this frame.
pub fn bounds_form(form: &mut BoundsForm<String>, ui: &mut Ui) -> bool {
    egui::Grid::new("bounds_form")
        .num_columns(4)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            bound_field(ui, "Column Min", &mut form.col_min);
            bound_field(ui, "Column Max", &mut form.col_max);
            ui.end_row();

            bound_field(ui, "Row Min", &mut form.row_min);
            bound_field(ui, "Row Max", &mut form.row_max);
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.button(SUBMIT_LABEL).clicked()
}

fn bound_field(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(format!("{label}:"));
    ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH));
}
