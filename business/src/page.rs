//! Page lifecycle wiring.
//!
//! A page starts unwired. The load event attaches the submit handler, after
//! which each submit click runs one generator cycle.

use log::{debug, warn};

use crate::{ErrorDisplay, GridSink, InputField, Outcome, TableGenerator};

/// Events the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading.
    Load,
    /// The submit control was clicked.
    SubmitClick,
}

#[derive(Debug)]
pub struct Page<F, E, G> {
    generator: TableGenerator<F, E, G>,
    submit_wired: bool,
}

impl<F, E, G> Page<F, E, G>
where
    F: InputField,
    E: ErrorDisplay,
    G: GridSink,
{
    pub fn new(generator: TableGenerator<F, E, G>) -> Self {
        Self {
            generator,
            submit_wired: false,
        }
    }

    /// Handles a page event.
    ///
    /// Returns the generator outcome for a handled submit click and `None`
    /// for everything else.
    pub fn dispatch(&mut self, event: PageEvent) -> Option<Outcome> {
        match event {
            PageEvent::Load => {
                if self.submit_wired {
                    warn!("Page: load event received twice, submit handler already attached");
                } else {
                    debug!("Page: attaching submit handler");
                    self.submit_wired = true;
                }
                None
            }
            PageEvent::SubmitClick if self.submit_wired => Some(self.generator.generate()),
            PageEvent::SubmitClick => {
                debug!("Page: submit clicked before load, ignoring");
                None
            }
        }
    }

    pub fn is_submit_wired(&self) -> bool {
        self.submit_wired
    }

    pub fn generator(&self) -> &TableGenerator<F, E, G> {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut TableGenerator<F, E, G> {
        &mut self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, PageEvent};
    use crate::{BoundsForm, MemoryGrid, TableGenerator};

    fn page() -> Page<String, String, MemoryGrid> {
        let form = BoundsForm::new("1".to_owned(), "2".to_owned(), "1".to_owned(), "2".to_owned());
        Page::new(TableGenerator::new(form, String::new(), MemoryGrid::new()))
    }

    #[test]
    fn test_click_before_load_is_ignored() {
        let mut page = page();
        assert_eq!(page.dispatch(PageEvent::SubmitClick), None);
        assert!(page.generator().mount().is_empty());
        assert_eq!(page.generator().form().col_min, "1");
    }

    #[test]
    fn test_load_wires_submit() {
        let mut page = page();
        assert_eq!(page.dispatch(PageEvent::Load), None);
        assert!(page.is_submit_wired());

        let outcome = page.dispatch(PageEvent::SubmitClick).expect("click is handled");
        assert!(outcome.is_rendered());
        assert_eq!(page.generator().mount().rows().len(), 3);
    }

    #[test]
    fn test_second_load_keeps_wiring() {
        let mut page = page();
        page.dispatch(PageEvent::Load);
        page.dispatch(PageEvent::Load);
        assert!(page.is_submit_wired());
    }
}
