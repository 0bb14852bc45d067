//! Harness helpers for widget tests.

use egui_kittest::Harness;
use timestable_business::PageEvent;

use crate::state::State;

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }
}

impl<'a> TestCtx<'a, State> {
    /// Harness over a loaded page, so submit clicks are handled.
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let mut state = State::test();
        state.page.dispatch(PageEvent::Load);

        Self {
            harness: Harness::new_ui_state(app, state),
        }
    }
}
