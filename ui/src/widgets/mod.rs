mod bounds_form;
mod env_version;
mod error_message;
mod table_generator;
pub mod times_table;

pub use bounds_form::{SUBMIT_LABEL, bounds_form};
pub use env_version::env_version;
pub use error_message::error_message;
pub use table_generator::table_generator;
pub use times_table::times_table;

pub fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
