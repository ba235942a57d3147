//! Simulated registration service
//!
//! Stands in for a real registration backend: waits for a fixed latency and
//! then succeeds, or fails when configured to. Never random, so a demo run
//! behaves the same every time.

use super::traits::RegistrationSubmitter;
use crate::config::FormConfig;
use crate::error::SubmissionError;
use crate::state::{RegistrationRequest, SuccessInfo};
use async_trait::async_trait;
use std::time::Duration;

/// Default network delay before the simulated service answers
const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Registration service that answers after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration, fail: bool) -> Self {
        Self { latency, fail }
    }

    /// Build from user configuration
    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.submit_latency(), config.simulate_failure_or_default())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY, false)
    }
}

#[async_trait]
impl RegistrationSubmitter for SimulatedSubmitter {
    async fn submit_registration(
        &self,
        request: &RegistrationRequest,
    ) -> Result<SuccessInfo, SubmissionError> {
        tracing::debug!(
            email = %request.email,
            interest = %request.interest,
            latency_ms = self.latency.as_millis() as u64,
            "Submitting registration"
        );

        tokio::time::sleep(self.latency).await;

        if self.fail {
            return Err(SubmissionError::Network("Network error".to_string()));
        }

        Ok(SuccessInfo::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Interest;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            name: "Jo".to_string(),
            email: "a@b.co".to_string(),
            phone: "+15551234567".to_string(),
            organization: "Acme".to_string(),
            interest: Interest::Sales,
        }
    }

    #[tokio::test]
    async fn test_succeeds_when_not_failing() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO, false);
        let info = submitter.submit_registration(&request()).await.unwrap();
        assert_eq!(info.message, "Registration successful!");
    }

    #[tokio::test]
    async fn test_fails_with_network_error_when_configured() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO, true);
        let err = submitter.submit_registration(&request()).await.unwrap_err();
        assert_eq!(err, SubmissionError::Network("Network error".to_string()));
    }

    #[test]
    fn test_default_latency_is_two_seconds() {
        assert_eq!(
            SimulatedSubmitter::default().latency(),
            Duration::from_millis(2000)
        );
    }

    #[test]
    fn test_from_config_uses_latency() {
        let config = FormConfig {
            submit_latency_ms: Some(10),
            simulate_failure: Some(true),
            ..Default::default()
        };
        let submitter = SimulatedSubmitter::from_config(&config);
        assert_eq!(submitter.latency(), Duration::from_millis(10));

        let err = tokio_test::block_on(submitter.submit_registration(&request()));
        assert!(err.is_err());
    }
}
