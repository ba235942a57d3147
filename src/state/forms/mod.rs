//! Form domain layer
//!
//! Field values, validation rules, the interest selection and the
//! controller that ties them to the submission lifecycle.

mod controller;
mod field;
mod interest;
pub mod validator;

pub use controller::{
    FormEvent, RegistrationFormController, SubmissionFailure, SubmissionState, SubmitOutcome,
    SubmitStart, MISSING_INTEREST_MESSAGE, NETWORK_FAILURE_MESSAGE, TRACKED_INPUTS,
};
pub use field::{FieldId, FieldStatus, FormField};
pub use interest::{Interest, InterestSelection, UnknownInterest};
