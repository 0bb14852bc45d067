//! The submit handler: read, validate, render, reset.

use log::{info, trace};

use crate::{
    Bounds, BoundsForm, ErrorDisplay, GridSink, InputField, ValidationError, build_table,
    validate_into,
};

/// Where the generator is within one submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next submit.
    #[default]
    Idle,
    Validating,
    /// A table was mounted.
    Rendered,
    /// Validation failed and the mount point was emptied.
    Rejected,
}

/// Result of one submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered(Bounds),
    Rejected(ValidationError),
}

impl Outcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            Self::Rendered(_) => None,
            Self::Rejected(err) => Some(*err),
        }
    }
}

/// Generates multiplication tables from a bounds form.
///
/// All collaborators are injected: the form fields, the error display and
/// the grid sink the table is mounted into.
#[derive(Debug)]
pub struct TableGenerator<F, E, G> {
    form: BoundsForm<F>,
    error_display: E,
    mount: G,
    phase: Phase,
}

impl<F, E, G> TableGenerator<F, E, G>
where
    F: InputField,
    E: ErrorDisplay,
    G: GridSink,
{
    pub fn new(form: BoundsForm<F>, error_display: E, mount: G) -> Self {
        Self {
            form,
            error_display,
            mount,
            phase: Phase::Idle,
        }
    }

    /// Runs one full submit cycle.
    ///
    /// The mount point is always emptied first and only receives a table when
    /// validation passes. The form is reset whatever the outcome.
    pub fn generate(&mut self) -> Outcome {
        self.enter(Phase::Validating);

        let raw = self.form.read();
        let outcome = match validate_into(&raw, &mut self.error_display) {
            Ok(bounds) => {
                build_table(&bounds).mount_into(&mut self.mount);
                self.enter(Phase::Rendered);
                info!(
                    "Rendered table columns {:?} rows {:?}",
                    bounds.columns(),
                    bounds.rows()
                );
                Outcome::Rendered(bounds)
            }
            Err(err) => {
                self.mount.clear();
                self.enter(Phase::Rejected);
                info!("Rejected bounds {raw:?}: {err}");
                Outcome::Rejected(err)
            }
        };

        self.form.reset();
        self.enter(Phase::Idle);
        outcome
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &BoundsForm<F> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BoundsForm<F> {
        &mut self.form
    }

    pub fn error_display(&self) -> &E {
        &self.error_display
    }

    pub fn mount(&self) -> &G {
        &self.mount
    }

    fn enter(&mut self, next: Phase) {
        trace!("TableGenerator: {:?} -> {next:?}", self.phase);
        self.phase = next;
    }
}
