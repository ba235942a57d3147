//! Registration payload and confirmation types

use super::forms::Interest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a validated form handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub interest: Interest,
}

/// Confirmation returned by a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessInfo {
    pub registration_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub message: String,
}

impl SuccessInfo {
    pub const DEFAULT_MESSAGE: &'static str = "Registration successful!";

    /// Confirmation with a fresh id stamped now
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            registration_id: Uuid::new_v4(),
            registered_at: Utc::now(),
            message: message.into(),
        }
    }
}

impl Default for SuccessInfo {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}
