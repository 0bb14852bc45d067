use egui::{Color32, Response, Ui};

/// Displays the build version as `stable:{version}`.
pub fn env_version(ui: &mut Ui) -> Response {
    let display_text = format!("stable:{}", env!("CARGO_PKG_VERSION"));
    ui.colored_label(Color32::GREEN, display_text)
}
