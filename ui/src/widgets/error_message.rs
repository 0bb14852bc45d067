use egui::{Response, Ui};

use crate::utils::colors::COLOR_RED;

/// Shows the validation message, or nothing when it is empty.
pub fn error_message(message: &str, ui: &mut Ui) -> Option<Response> {
    if message.is_empty() {
        return None;
    }
    Some(ui.colored_label(COLOR_RED, message))
}
