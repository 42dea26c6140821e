//! Submission state machine.
//!
//! One submission attempt moves `Idle -> Validating -> Submitting ->
//! {Succeeded, Failed}`. While `Submitting`, the submit affordance must stay
//! disabled, the only concurrency hazard in this core;
//! [`Submission::in_flight`] is the explicit state the rendering layer reads
//! instead of an ad-hoc loading flag. `Failed` is not sticky: a new attempt
//! re-enters `Validating`.

use serde::{Deserialize, Serialize};

/// States of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubmissionState {
    /// Nothing in progress.
    #[default]
    Idle,
    /// Pre-submission checks are running; nothing sent yet.
    Validating,
    /// The exchange is in flight; submit is disabled.
    Submitting,
    /// The endpoint accepted the submission.
    Succeeded,
    /// Validation or the exchange failed; see the attached error text.
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }
}

/// Tracks one submission workflow: its state plus the displayed error text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    state: SubmissionState,
    error: Option<String>,
}

impl Submission {
    /// A fresh, idle submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The displayed error text of the last failed attempt, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while an exchange is in flight.
    pub fn in_flight(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Whether a new attempt may start.
    pub fn can_submit(&self) -> bool {
        !self.in_flight()
    }

    /// Start a new attempt: enters `Validating` and clears the previous
    /// error. Returns `false`, and changes nothing, while an exchange is
    /// in flight.
    pub fn begin(&mut self) -> bool {
        if self.in_flight() {
            return false;
        }
        self.state = SubmissionState::Validating;
        self.error = None;
        true
    }

    /// Validation passed; the exchange is now in flight.
    pub fn submitting(&mut self) {
        self.state = SubmissionState::Submitting;
    }

    /// The attempt completed successfully.
    pub fn succeed(&mut self) {
        self.state = SubmissionState::Succeeded;
        self.error = None;
    }

    /// The attempt failed; `message` becomes the displayed error text.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = SubmissionState::Failed;
        self.error = Some(message.into());
    }

    /// Back to `Idle`, dropping any error text.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
