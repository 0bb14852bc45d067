use egui_kittest::Harness;
use kittest::Queryable;
use timestable_business::BoundsForm;
use timestable_ui::TimesTableApp;
use timestable_ui::widgets::SUBMIT_LABEL;
use timestable_ui::state::State;

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }
}

impl<'a> TestCtx<'a, TimesTableApp> {
    pub fn new_app() -> Self {
        let app = TimesTableApp::new(State::test());
        let harness = Harness::new_eframe(|_| app);

        Self { harness }
    }
}

/// Types the four bounds into the form, in col-min, col-max, row-min, row-max order.
pub fn fill_form(harness: &mut Harness<'_, TimesTableApp>, values: [&str; 4]) {
    let form = harness
        .state_mut()
        .state
        .page
        .generator_mut()
        .form_mut();
    form.col_min = values[0].to_owned();
    form.col_max = values[1].to_owned();
    form.row_min = values[2].to_owned();
    form.row_max = values[3].to_owned();
}

/// Clicks the submit button and lets the app settle.
pub fn submit(harness: &mut Harness<'_, TimesTableApp>) {
    harness
        .query_by_label(SUBMIT_LABEL)
        .expect("submit button should be present")
        .click();
    harness.run();
}

pub fn form_is_empty(harness: &Harness<'_, TimesTableApp>) -> bool {
    harness.state().state.page.generator().form() == &BoundsForm::default()
}
