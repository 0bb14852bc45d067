//! The generator page: form, validation message and table.

use egui::{Response, Ui};
use timestable_business::PageEvent;

use super::{bounds_form, error_message, times_table};
use crate::state::TablePage;

/// Displays the whole generator and runs a submit when the button is clicked.
pub fn table_generator(page: &mut TablePage, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Multiplication Table");
        ui.add_space(12.0);

        let submitted = bounds_form(page.generator_mut().form_mut(), ui);
        if submitted {
            page.dispatch(PageEvent::SubmitClick);
        }

        ui.add_space(8.0);
        error_message(page.generator().error_display(), ui);
        ui.add_space(8.0);

        times_table(page.generator().mount(), ui);
    })
    .response
}
