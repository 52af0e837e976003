//! Submission intake seam
//!
//! Every "submit" in the portal goes through this narrow interface:
//! `submit(payload) -> Result<SubmissionId, IntakeError>`. The shipped
//! implementation simulates the network call with a fixed latency and
//! discards the payload - there is no backend and nothing persists.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::submission::{SubmissionId, SubmissionType};

/// Latency of the simulated network round-trip
pub const SUBMIT_LATENCY_MS: u64 = 1500;

/// Latency of the simulated card download
pub const DOWNLOAD_LATENCY_MS: u64 = 2000;

/// Intake failure taxonomy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// Payload rejected by the intake side
    #[error("Validation rejected: {0}")]
    Validation(String),

    /// The (simulated) transport failed
    #[error("Transport error: {0}")]
    Transport(String),
}

/// What a submitting surface hands to the intake service
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntakePayload {
    /// Gallery fan-art submission (two-step form modal)
    FanArt {
        title: String,
        submission_type: SubmissionType,
        file_name: String,
        description: String,
        creator_name: String,
        creator_email: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        country: Option<String>,
        tags: Vec<String>,
    },
    /// Personal story for the journal timeline
    Story {
        title: String,
        author_name: String,
        author_email: String,
        body: String,
    },
    /// GVIPC membership application
    Application {
        full_name: String,
        email: String,
        favorite_movie: String,
        reason: String,
    },
    /// A completed GVIPC challenge
    Challenge { variant: String },
    /// Member card "download"
    CardDownload { member_id: String },
}

impl IntakePayload {
    fn latency(&self) -> Duration {
        match self {
            IntakePayload::CardDownload { .. } => Duration::from_millis(DOWNLOAD_LATENCY_MS),
            _ => Duration::from_millis(SUBMIT_LATENCY_MS),
        }
    }
}

/// The submission-intake collaborator
#[async_trait]
pub trait SubmissionIntake: Send + Sync {
    async fn submit(&self, payload: IntakePayload) -> Result<SubmissionId, IntakeError>;
}

/// Fixed-delay intake with no persisted effect.
///
/// Logs the payload at debug level, waits out the latency, and returns a
/// fresh id. Data is gone once the future resolves.
#[derive(Debug, Clone, Default)]
pub struct SimulatedIntake;

impl SimulatedIntake {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionIntake for SimulatedIntake {
    async fn submit(&self, payload: IntakePayload) -> Result<SubmissionId, IntakeError> {
        match serde_json::to_string(&payload) {
            Ok(json) => tracing::debug!(payload = %json, "intake submit"),
            Err(e) => tracing::debug!("intake submit (unserializable payload: {})", e),
        }

        tokio::time::sleep(payload.latency()).await;

        let id = SubmissionId::new();
        tracing::info!("intake accepted {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge_payload() -> IntakePayload {
        IntakePayload::Challenge {
            variant: "quiz".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_takes_fixed_latency() {
        let intake = SimulatedIntake::new();
        let started = tokio::time::Instant::now();
        intake.submit(challenge_payload()).await.expect("accepted");
        assert_eq!(
            started.elapsed(),
            Duration::from_millis(SUBMIT_LATENCY_MS)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_card_download_takes_longer() {
        let intake = SimulatedIntake::new();
        let started = tokio::time::Instant::now();
        intake
            .submit(IntakePayload::CardDownload {
                member_id: "KR-123456".to_string(),
            })
            .await
            .expect("accepted");
        assert_eq!(
            started.elapsed(),
            Duration::from_millis(DOWNLOAD_LATENCY_MS)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_submit_yields_fresh_id() {
        let intake = SimulatedIntake::new();
        let a = intake.submit(challenge_payload()).await.unwrap();
        let b = intake.submit(challenge_payload()).await.unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_payload_serializes_with_kind_tag() {
        let json = serde_json::to_string(&challenge_payload()).unwrap();
        assert!(json.contains(r#""kind":"challenge""#));
        assert!(json.contains(r#""variant":"quiz""#));
    }
}
