//! Wizard Flow
//!
//! The reservation wizard is a three-step state machine: pick a table,
//! fill the form, read the confirmation. Each step owns exactly the data
//! that stage needs, so "which table was chosen" only exists once a table
//! was actually chosen and a finished [`Reservation`] only exists on the
//! confirmation screen.
//!
//! [`transition`] is pure; [`Flow::apply`] is the stateful wrapper the UI
//! drives, which also traces every accepted transition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reservation::Reservation;

/// Current wizard step together with its step-scoped data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Floor plan, waiting for a table pick.
    Selection,
    /// Reservation form for the chosen table.
    Form { table_id: String },
    /// Confirmation screen for a completed reservation.
    Confirmation { reservation: Reservation },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Selection => "selection",
            Step::Form { .. } => "form",
            Step::Confirmation { .. } => "confirmation",
        }
    }
}

/// Inputs that move the wizard between steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// A table was picked on the floor plan.
    SelectTable(String),
    /// The form was submitted with a finished reservation.
    SubmitReservation(Reservation),
    /// Back from the form to the floor plan, discarding the draft.
    GoBack,
    /// Start over from the confirmation screen.
    StartNew,
}

impl FlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::SelectTable(_) => "select_table",
            FlowEvent::SubmitReservation(_) => "submit_reservation",
            FlowEvent::GoBack => "go_back",
            FlowEvent::StartNew => "start_new",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("event '{event}' is not valid in step '{step}'")]
    InvalidTransition {
        step: &'static str,
        event: &'static str,
    },
}

/// Compute the step that follows `step` under `event`.
///
/// Only the four drawn edges exist: select from the floor plan, submit or
/// go back from the form, start over from the confirmation. Any other
/// pairing is rejected and the caller's state is left untouched.
pub fn transition(step: &Step, event: FlowEvent) -> Result<Step, FlowError> {
    match (step, event) {
        // Table ids are taken as given here; whether an id is known or
        // available is the floor plan's concern.
        (Step::Selection, FlowEvent::SelectTable(table_id)) => Ok(Step::Form { table_id }),
        (Step::Form { .. }, FlowEvent::SubmitReservation(reservation)) => {
            Ok(Step::Confirmation { reservation })
        }
        (Step::Form { .. }, FlowEvent::GoBack) => Ok(Step::Selection),
        (Step::Confirmation { .. }, FlowEvent::StartNew) => Ok(Step::Selection),
        (step, event) => Err(FlowError::InvalidTransition {
            step: step.name(),
            event: event.name(),
        }),
    }
}

/// Stateful wizard handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    step: Step,
}

impl Flow {
    /// New wizard, starting on the floor plan.
    pub fn new() -> Self {
        Self {
            step: Step::Selection,
        }
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Apply one event, advancing the step on success.
    ///
    /// A rejected event leaves the current step unchanged.
    pub fn apply(&mut self, event: FlowEvent) -> Result<&Step, FlowError> {
        let from = self.step.name();
        let event_name = event.name();
        self.step = transition(&self.step, event)?;
        match &self.step {
            Step::Form { table_id } => {
                tracing::info!(
                    from,
                    to = self.step.name(),
                    event = event_name,
                    table_id = %table_id,
                    "wizard step"
                );
            }
            _ => {
                tracing::info!(from, to = self.step.name(), event = event_name, "wizard step");
            }
        }
        Ok(&self.step)
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}
