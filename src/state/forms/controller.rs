//! Registration form controller
//!
//! Owns the four text fields and the interest selection, derives the
//! completion percentage and drives the submission lifecycle:
//!
//! ```text
//! Idle --submit(valid)--> Submitting --ok--> Succeeded --reset--> Idle
//!                         Submitting --err--> Failed --submit--> Submitting
//! Idle --submit(invalid)--> Failed --edit--> Idle
//! ```
//!
//! Every observable change is recorded as a [`FormEvent`] for the renderer
//! to drain with [`RegistrationFormController::take_events`].

use super::field::{FieldId, FieldStatus, FormField};
use super::interest::{Interest, InterestSelection};
use super::validator;
use crate::error::{SubmissionError, ValidationError};
use crate::state::{RegistrationRequest, SuccessInfo};
use crate::submission::RegistrationSubmitter;
use std::sync::Arc;

/// Four text fields plus the interest selection
pub const TRACKED_INPUTS: usize = 5;

/// Shown when submit is attempted without an interest
pub const MISSING_INTEREST_MESSAGE: &str = "Please select your area of interest";

/// Shown to the user when the registration service fails
pub const NETWORK_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Why the last submit attempt did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// A field or the interest selection blocked the submit
    Validation(String),
    /// The registration service failed
    Network(String),
}

impl SubmissionFailure {
    pub fn message(&self) -> &str {
        match self {
            SubmissionFailure::Validation(message) | SubmissionFailure::Network(message) => {
                message
            }
        }
    }
}

/// Lifecycle of a registration submit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(SuccessInfo),
    Failed(SubmissionFailure),
}

impl SubmissionState {
    /// Whether a new submit attempt is accepted from this state
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(SubmissionFailure::Validation(_)) => "failed(validation)",
            SubmissionState::Failed(SubmissionFailure::Network(_)) => "failed(network)",
        }
    }
}

/// Notification for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldValidated {
        field: FieldId,
        error: Option<String>,
    },
    CompletionChanged {
        percentage: u8,
    },
    SubmissionChanged(SubmissionState),
}

/// Result of the synchronous half of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Now submitting; hand this request to the collaborator
    Ready(RegistrationRequest),
    /// A submit is already in flight or has succeeded
    Ignored,
    /// Validation blocked the submit; carries the first blocking message
    Invalid(String),
}

/// Final result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Invalid(String),
    Succeeded(SuccessInfo),
    Failed(SubmissionError),
}

/// Controller for the registration form
pub struct RegistrationFormController {
    fields: [FormField; 4],
    interest: InterestSelection,
    submission: SubmissionState,
    submitter: Arc<dyn RegistrationSubmitter>,
    last_percentage: u8,
    events: Vec<FormEvent>,
}

impl RegistrationFormController {
    pub fn new(submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        Self {
            fields: FieldId::ALL.map(FormField::new),
            interest: InterestSelection::default(),
            submission: SubmissionState::Idle,
            submitter,
            last_percentage: 0,
            events: Vec::new(),
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[id.index()]
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn interest(&self) -> Option<Interest> {
        self.interest.selected()
    }

    pub fn submission_state(&self) -> &SubmissionState {
        &self.submission
    }

    /// The collaborator used for submits, for running it off the event loop
    pub fn submitter(&self) -> Arc<dyn RegistrationSubmitter> {
        Arc::clone(&self.submitter)
    }

    /// Store new text for `field`, dropping its stale verdict
    ///
    /// Returns true when the text is non-blank, i.e. a debounced
    /// revalidation is worth scheduling.
    pub fn on_field_changed(&mut self, field: FieldId, text: impl Into<String>) -> bool {
        let slot = &mut self.fields[field.index()];
        slot.set_text(text.into());
        let filled = slot.is_filled();
        tracing::debug!(field = %field, filled, "Field changed");

        self.leave_failed_state();
        self.refresh_completion();
        filled
    }

    /// Empty `field`
    pub fn clear_field(&mut self, field: FieldId) {
        self.on_field_changed(field, String::new());
    }

    /// Validate `field` against its current text and record the verdict
    pub fn on_field_blurred(&mut self, field: FieldId) -> Result<(), ValidationError> {
        let slot = &mut self.fields[field.index()];
        let verdict = validator::validate(field, slot.value());
        slot.set_status(match &verdict {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err.message.clone()),
        });
        self.events.push(FormEvent::FieldValidated {
            field,
            error: verdict.as_ref().err().map(|e| e.message.clone()),
        });
        verdict
    }

    /// Choose `interest`, replacing any previous choice
    pub fn on_interest_selected(&mut self, interest: Interest) {
        self.interest.select(interest);
        tracing::debug!(%interest, "Interest selected");

        self.leave_failed_state();
        self.refresh_completion();
    }

    /// Completion over the five tracked inputs, 0..=100
    pub fn completion_percentage(&self) -> u8 {
        let mut completed = self.fields.iter().filter(|f| f.is_filled()).count();
        if self.interest.is_set() {
            completed += 1;
        }
        ((completed * 100) as f64 / TRACKED_INPUTS as f64).round() as u8
    }

    /// Validate everything and, if the form is complete, move to Submitting
    ///
    /// Ignored while a submit is in flight or after success. All four fields
    /// are validated so every error is recorded, but only the first blocking
    /// message is reported.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if !self.submission.accepts_submit() {
            tracing::debug!(state = self.submission.name(), "Ignoring submit");
            return SubmitStart::Ignored;
        }

        let mut first_error = None;
        for field in FieldId::ALL {
            if let Err(err) = self.on_field_blurred(field) {
                first_error.get_or_insert(err.message);
            }
        }

        let interest = match (first_error, self.interest.selected()) {
            (None, Some(interest)) => interest,
            (first_error, _) => {
                let message =
                    first_error.unwrap_or_else(|| MISSING_INTEREST_MESSAGE.to_string());
                tracing::debug!(%message, "Registration blocked by validation");
                self.transition(SubmissionState::Failed(SubmissionFailure::Validation(
                    message.clone(),
                )));
                return SubmitStart::Invalid(message);
            }
        };

        let request = RegistrationRequest {
            name: validator::trim_input(self.field(FieldId::Name).value()).to_string(),
            email: validator::trim_input(self.field(FieldId::Email).value()).to_string(),
            phone: validator::trim_input(self.field(FieldId::Phone).value()).to_string(),
            organization: validator::trim_input(self.field(FieldId::Organization).value())
                .to_string(),
            interest,
        };

        tracing::debug!(email = %request.email, %interest, "Submitting registration");
        self.transition(SubmissionState::Submitting);
        SubmitStart::Ready(request)
    }

    /// Apply the collaborator's answer to an in-flight submit
    pub fn complete_submit(
        &mut self,
        result: Result<SuccessInfo, SubmissionError>,
    ) -> SubmitOutcome {
        if !self.submission.is_submitting() {
            tracing::debug!(
                state = self.submission.name(),
                "Dropping submission result outside of a submit"
            );
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(info) => {
                tracing::debug!(
                    registration_id = %info.registration_id,
                    "Registration succeeded"
                );
                self.transition(SubmissionState::Succeeded(info.clone()));
                SubmitOutcome::Succeeded(info)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Registration failed");
                self.transition(SubmissionState::Failed(SubmissionFailure::Network(
                    err.to_string(),
                )));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Validate, call the collaborator once, and record its answer
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.begin_submit() {
            SubmitStart::Ready(request) => request,
            SubmitStart::Ignored => return SubmitOutcome::Ignored,
            SubmitStart::Invalid(message) => return SubmitOutcome::Invalid(message),
        };

        let submitter = self.submitter();
        let result = submitter.submit_registration(&request).await;
        self.complete_submit(result)
    }

    /// Clear every field and the selection, and return to Idle.
    /// Ignored while a submission is in flight.
    pub fn reset(&mut self) {
        if self.submission.is_submitting() {
            tracing::debug!("Ignoring reset during submission");
            return;
        }

        for field in &mut self.fields {
            field.clear();
        }
        self.interest.clear();
        tracing::debug!("Form reset");

        if self.submission != SubmissionState::Idle {
            self.transition(SubmissionState::Idle);
        }
        self.refresh_completion();
    }

    /// Drain the notifications recorded since the last call
    pub fn take_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!(from = self.submission.name(), to = next.name(), "Submission state");
        self.submission = next.clone();
        self.events.push(FormEvent::SubmissionChanged(next));
    }

    fn leave_failed_state(&mut self) {
        if matches!(self.submission, SubmissionState::Failed(_)) {
            self.transition(SubmissionState::Idle);
        }
    }

    fn refresh_completion(&mut self) {
        let percentage = self.completion_percentage();
        if percentage != self.last_percentage {
            self.last_percentage = percentage;
            self.events.push(FormEvent::CompletionChanged { percentage });
        }
    }
}
