use timestable_business::PageEvent;

use crate::{state::State, widgets};

pub struct TimesTableApp {
    pub state: State,
}

impl TimesTableApp {
    /// Called once before the first frame.
    ///
    /// This is the page load: the submit handler is attached here.
    pub fn new(mut state: State) -> Self {
        state.page.dispatch(PageEvent::Load);
        Self { state }
    }
}

impl eframe::App for TimesTableApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::env_version(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::table_generator(&mut self.state.page, ui);

            ui.separator();
            widgets::powered_by_egui_and_eframe(ui);
        });
    }
}
