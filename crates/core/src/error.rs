// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::wizard::StepId;
use auberge_domain::{DomainError, ErrorKind};

/// Errors that can occur during wizard navigation and state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The active step's data failed validation, so the wizard cannot advance.
    StepBlocked {
        /// The step that failed validation.
        step: StepId,
        /// Why the step is not complete.
        reason: DomainError,
    },
    /// `next()` was called on the last input step; the booking must be submitted.
    AtLastStep(StepId),
    /// `back()` was called on the first step.
    AtFirstStep,
    /// The booking has been confirmed and the wizard is display-only.
    AlreadyConfirmed,
    /// A submission is in flight; navigation is disabled until it settles.
    NavigationLocked,
    /// Submission was requested from a step other than the last input step.
    NotSubmittable(StepId),
    /// `complete_submission()` or `abort_submission()` without a pending submission.
    NoPendingSubmission,
    /// A wizard was configured with fewer than two steps.
    InvalidFlow(String),
}

impl CoreError {
    /// The error kind shown to the guest.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::StepBlocked { step, reason } => {
                write!(f, "Cannot leave step '{step}': {reason}")
            }
            Self::AtLastStep(step) => {
                write!(f, "Step '{step}' is the last step; submit the booking instead")
            }
            Self::AtFirstStep => write!(f, "Already at the first step"),
            Self::AlreadyConfirmed => write!(f, "Booking is already confirmed"),
            Self::NavigationLocked => {
                write!(f, "Navigation is disabled while a submission is pending")
            }
            Self::NotSubmittable(step) => {
                write!(f, "Booking cannot be submitted from step '{step}'")
            }
            Self::NoPendingSubmission => write!(f, "No submission is pending"),
            Self::InvalidFlow(msg) => write!(f, "Invalid flow: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
