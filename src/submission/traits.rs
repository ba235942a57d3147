//! Trait abstraction for the registration service to enable mocking in tests

use crate::error::SubmissionError;
use crate::state::{RegistrationRequest, SuccessInfo};
use async_trait::async_trait;

/// Performs the actual registration effect
///
/// Called exactly once per accepted submit. Latency, timeouts and failure
/// modes belong to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationSubmitter: Send + Sync {
    /// Register the attendee described by `request`
    async fn submit_registration(
        &self,
        request: &RegistrationRequest,
    ) -> Result<SuccessInfo, SubmissionError>;
}
