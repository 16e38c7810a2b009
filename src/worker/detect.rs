//! The detection pipeline: fetch, parse, vectorize, classify, notify.
//!
//! Each stage runs only after the previous one completed. The first failure
//! is logged with its stage and returned unchanged; nothing is retried and no
//! reply is sent for a message that did not make it through classification.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use super::{event, reply};
use crate::clients::classifier::{self, Classifier};
use crate::clients::{Mailer, ObjectStore};
use crate::core::config::AppConfig;
use crate::core::models::ObjectLocation;
use crate::email;
use crate::errors::SpamDetectorError;
use crate::vectorizer;

/// Value returned to the Lambda runtime once the reply has been sent.
pub const SUCCESS: &str = "success";

pub struct Detector {
    config: AppConfig,
    storage: Arc<dyn ObjectStore>,
    classifier: Arc<dyn Classifier>,
    mailer: Arc<dyn Mailer>,
}

impl Detector {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn ObjectStore>,
        classifier: Arc<dyn Classifier>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            config,
            storage,
            classifier,
            mailer,
        }
    }

    /// Processes one S3 notification end to end.
    ///
    /// # Errors
    ///
    /// Returns the first [`SpamDetectorError`] raised by any stage.
    pub async fn process_event(&self, payload: &Value) -> Result<&'static str, SpamDetectorError> {
        match self.run(payload).await {
            Ok(()) => Ok(SUCCESS),
            Err(e) => {
                error!(stage = e.stage(), "Spam detection failed: {}", e);
                Err(e)
            }
        }
    }

    async fn run(&self, payload: &Value) -> Result<(), SpamDetectorError> {
        let location = event::parse_event(payload)?;
        self.process_object(&location).await
    }

    #[tracing::instrument(
        name = "detector.process_object",
        skip(self, location),
        fields(bucket = %location.bucket, key = %location.key)
    )]
    async fn process_object(&self, location: &ObjectLocation) -> Result<(), SpamDetectorError> {
        let raw = self.storage.get_object(location).await?;
        let raw = String::from_utf8(raw).map_err(|e| {
            SpamDetectorError::StorageFetchError(format!("email is not valid UTF-8: {}", e))
        })?;

        let parsed = email::parse_email(&raw)?;
        let body = email::normalize_body(parsed.body.plain_text());
        info!(
            "Parsed email from {} to {} sent {} with subject {:?}",
            parsed.sender,
            parsed.recipient.as_deref().unwrap_or("<unknown>"),
            parsed.sent_at,
            parsed.subject
        );

        #[cfg(feature = "debug-logs")]
        info!("Normalized email body: {}", body);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Normalized email body has {} characters",
            body.chars().count()
        );

        let features = vectorizer::vectorize(&[body.as_str()], self.config.vocabulary_length);
        let request = classifier::build_request_body(&features)?;
        let response = self.classifier.invoke_endpoint(&request).await?;
        let prediction = classifier::parse_prediction(&response)?;
        info!(
            "Email classified as {} with probability {}",
            prediction.label, prediction.probability
        );

        let notification = reply::build_notification(&self.config, &parsed, &body, &prediction);
        self.mailer.send(&notification).await?;

        Ok(())
    }
}
