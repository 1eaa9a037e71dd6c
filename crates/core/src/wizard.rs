// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Linear step wizard.
//!
//! A wizard is an ordered list of steps ending in a display-only
//! confirmation step. Navigation is strictly linear:
//!
//! - `next()` advances only when the active step validates
//! - `back()` is always allowed except on the first and the confirmation step
//! - the confirmation step is reached only by settling a submission
//!
//! While a submission is pending, both directions are locked.

use crate::error::CoreError;
use auberge_domain::DomainError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identifies a wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    /// Check-in and check-out dates.
    Dates,
    /// Optional add-on services for a room stay.
    AddOns,
    /// Spa service selection.
    Services,
    /// Restaurant date, time and party size.
    Details,
    /// Guest contact details.
    GuestInfo,
    /// Card details.
    Payment,
    /// Display-only confirmation.
    Confirmation,
}

impl StepId {
    /// Returns the string representation of the step.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dates => "dates",
            Self::AddOns => "add_ons",
            Self::Services => "services",
            Self::Details => "details",
            Self::GuestInfo => "guest_info",
            Self::Payment => "payment",
            Self::Confirmation => "confirmation",
        }
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decides whether a step's data is complete.
pub type StepValidator<D> = fn(&D) -> Result<(), DomainError>;

fn always_valid<D>(_: &D) -> Result<(), DomainError> {
    Ok(())
}

/// One step of a wizard.
pub struct Step<D> {
    id: StepId,
    validator: StepValidator<D>,
}

impl<D> Step<D> {
    /// Creates an input step guarded by `validator`.
    #[must_use]
    pub const fn new(id: StepId, validator: StepValidator<D>) -> Self {
        Self { id, validator }
    }

    /// Creates the display-only confirmation step.
    #[must_use]
    pub fn confirmation() -> Self {
        Self {
            id: StepId::Confirmation,
            validator: always_valid::<D>,
        }
    }

    /// Returns the step identifier.
    #[must_use]
    pub const fn id(&self) -> StepId {
        self.id
    }

    /// Runs the step's validator against `data`.
    ///
    /// # Errors
    ///
    /// Returns the validator's error when the step is incomplete.
    pub fn validate(&self, data: &D) -> Result<(), DomainError> {
        (self.validator)(data)
    }
}

impl<D> Clone for Step<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            validator: self.validator,
        }
    }
}

impl<D> std::fmt::Debug for Step<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step").field("id", &self.id).finish()
    }
}

/// A successful move between two steps.
///
/// The UI scrolls to the top of the page on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The step that was active before the move.
    pub from: StepId,
    /// The step that is active after the move.
    pub to: StepId,
}

/// A linear multi-step form.
///
/// Invariant: `0 <= current < steps.len()` and the last step is terminal.
#[derive(Debug, Clone)]
pub struct Wizard<D> {
    steps: Vec<Step<D>>,
    current: usize,
    data: D,
    pending: bool,
}

impl<D> Wizard<D> {
    /// Creates a wizard positioned on the first step.
    ///
    /// A confirmation step is appended after `steps`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFlow` if `steps` is empty or already
    /// contains a confirmation step.
    pub fn new(steps: Vec<Step<D>>, data: D) -> Result<Self, CoreError> {
        if steps.is_empty() {
            return Err(CoreError::InvalidFlow(String::from(
                "a wizard needs at least one input step",
            )));
        }
        if steps.iter().any(|step| step.id == StepId::Confirmation) {
            return Err(CoreError::InvalidFlow(String::from(
                "the confirmation step is appended automatically",
            )));
        }

        let mut steps: Vec<Step<D>> = steps;
        steps.push(Step::confirmation());

        Ok(Self {
            steps,
            current: 0,
            data,
            pending: false,
        })
    }

    /// Returns the active step identifier.
    #[must_use]
    pub fn current_step(&self) -> StepId {
        self.steps[self.current].id
    }

    /// Returns the zero-based index of the active step.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the step identifiers in order.
    #[must_use]
    pub fn step_ids(&self) -> Vec<StepId> {
        self.steps.iter().map(Step::id).collect()
    }

    /// Returns the form data.
    #[must_use]
    pub const fn data(&self) -> &D {
        &self.data
    }

    /// Returns the form data for editing.
    pub const fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Consumes the wizard and returns the form data.
    #[must_use]
    pub fn into_data(self) -> D {
        self.data
    }

    /// Returns true once the booking has been confirmed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current == self.terminal_index()
    }

    /// Returns true while a submission is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Validates the active step without moving.
    ///
    /// # Errors
    ///
    /// Returns the active step's validation error.
    pub fn validate_current(&self) -> Result<(), DomainError> {
        self.steps[self.current].validate(&self.data)
    }

    /// Returns true if `next()` (or submission, on the last input step)
    /// would pass validation. Drives the enabled state of "continue".
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.pending && !self.is_complete() && self.validate_current().is_ok()
    }

    /// Moves to the next input step.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A submission is pending
    /// - The booking is already confirmed
    /// - The active step is the last input step (submit instead)
    /// - The active step fails validation
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Transition, CoreError> {
        self.ensure_unlocked()?;

        let from: StepId = self.current_step();
        if self.current + 1 >= self.terminal_index() {
            return Err(CoreError::AtLastStep(from));
        }

        self.steps[self.current]
            .validate(&self.data)
            .map_err(|reason| CoreError::StepBlocked { step: from, reason })?;

        Ok(self.move_to(self.current + 1))
    }

    /// Moves to the previous step.
    ///
    /// # Errors
    ///
    /// Returns an error if a submission is pending, the booking is already
    /// confirmed, or the active step is the first one.
    pub fn back(&mut self) -> Result<Transition, CoreError> {
        self.ensure_unlocked()?;

        if self.current == 0 {
            return Err(CoreError::AtFirstStep);
        }

        Ok(self.move_to(self.current - 1))
    }

    /// Validates the last input step and locks navigation while the booking
    /// is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if navigation is already locked, the booking is
    /// confirmed, the active step is not the last input step, or any input
    /// step fails validation.
    pub fn begin_submission(&mut self) -> Result<(), CoreError> {
        self.ensure_unlocked()?;

        let step: StepId = self.current_step();
        if self.current + 1 != self.terminal_index() {
            return Err(CoreError::NotSubmittable(step));
        }

        // Earlier steps may have been edited through data_mut() since they
        // were passed, so every input step is checked again.
        for input in &self.steps[..self.terminal_index()] {
            input
                .validate(&self.data)
                .map_err(|reason| CoreError::StepBlocked {
                    step: input.id,
                    reason,
                })?;
        }

        self.pending = true;
        debug!(%step, "Submission started, navigation locked");
        Ok(())
    }

    /// Settles a successful submission and shows the confirmation step.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoPendingSubmission` if no submission is in flight.
    pub fn complete_submission(&mut self) -> Result<Transition, CoreError> {
        if !self.pending {
            return Err(CoreError::NoPendingSubmission);
        }
        self.pending = false;
        Ok(self.jump_to(self.terminal_index()))
    }

    /// Settles a failed submission, unlocking navigation on the same step.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoPendingSubmission` if no submission is in flight.
    pub fn abort_submission(&mut self) -> Result<(), CoreError> {
        if !self.pending {
            return Err(CoreError::NoPendingSubmission);
        }
        self.pending = false;
        debug!(step = %self.current_step(), "Submission aborted, navigation unlocked");
        Ok(())
    }

    fn terminal_index(&self) -> usize {
        self.steps.len() - 1
    }

    fn ensure_unlocked(&self) -> Result<(), CoreError> {
        if self.pending {
            return Err(CoreError::NavigationLocked);
        }
        if self.is_complete() {
            return Err(CoreError::AlreadyConfirmed);
        }
        Ok(())
    }

    fn move_to(&mut self, index: usize) -> Transition {
        let transition: Transition = Transition {
            from: self.current_step(),
            to: self.steps[index].id,
        };
        self.current = index;
        debug!(from = %transition.from, to = %transition.to, "Wizard moved, scroll to top");
        transition
    }

    // Only the terminal confirmation transition jumps; there is no public
    // random access.
    fn jump_to(&mut self, index: usize) -> Transition {
        self.move_to(index)
    }
}
