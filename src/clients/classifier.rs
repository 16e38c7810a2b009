//! SageMaker inference endpoint client
//!
//! The endpoint takes a JSON array of feature vectors and answers with
//! nested `predicted_label` / `predicted_probability` arrays, one inner
//! array per input vector.

use async_trait::async_trait;
use aws_sdk_sagemakerruntime::Client as SageMakerClient;
use aws_sdk_sagemakerruntime::error::DisplayErrorContext;
use aws_sdk_sagemakerruntime::primitives::Blob;
use serde::Deserialize;
use tracing::info;

use crate::core::models::{Prediction, SpamLabel};
use crate::errors::SpamDetectorError;

pub const CONTENT_TYPE: &str = "application/json";

#[async_trait]
pub trait Classifier: Send + Sync {
    /// Sends a JSON request body to the endpoint and returns its raw response body.
    async fn invoke_endpoint(&self, payload: &str) -> Result<String, SpamDetectorError>;
}

pub struct SageMakerClassifier {
    client: SageMakerClient,
    endpoint_name: String,
}

impl SageMakerClassifier {
    pub fn new(client: SageMakerClient, endpoint_name: impl Into<String>) -> Self {
        Self {
            client,
            endpoint_name: endpoint_name.into(),
        }
    }
}

#[async_trait]
impl Classifier for SageMakerClassifier {
    async fn invoke_endpoint(&self, payload: &str) -> Result<String, SpamDetectorError> {
        info!(
            "Invoking SageMaker endpoint {} with {} byte payload",
            self.endpoint_name,
            payload.len()
        );
        let output = self
            .client
            .invoke_endpoint()
            .endpoint_name(&self.endpoint_name)
            .content_type(CONTENT_TYPE)
            .body(Blob::new(payload.as_bytes().to_vec()))
            .send()
            .await
            .map_err(|e| {
                SpamDetectorError::ClassifierInvocationError(format!(
                    "{}: {}",
                    self.endpoint_name,
                    DisplayErrorContext(&e)
                ))
            })?;

        let body = output
            .body()
            .map(|blob| blob.as_ref().to_vec())
            .unwrap_or_default();
        String::from_utf8(body).map_err(|e| {
            SpamDetectorError::ClassifierResponseFormatError(format!(
                "response body is not UTF-8: {}",
                e
            ))
        })
    }
}

/// Serializes feature vectors as the endpoint's JSON request body.
///
/// # Errors
///
/// Returns `ClassifierInvocationError` if the vectors cannot be serialized.
pub fn build_request_body(vectors: &[Vec<f64>]) -> Result<String, SpamDetectorError> {
    serde_json::to_string(vectors).map_err(|e| {
        SpamDetectorError::ClassifierInvocationError(format!("Failed to encode features: {}", e))
    })
}

#[derive(Debug, Deserialize)]
struct EndpointResponse {
    predicted_label: Vec<Vec<f64>>,
    predicted_probability: Vec<Vec<f64>>,
}

/// Reads the first label and probability out of an endpoint response.
///
/// # Errors
///
/// Returns `ClassifierResponseFormatError` when the body is not the expected
/// nested-array JSON or the probability lies outside `[0, 1]`.
pub fn parse_prediction(body: &str) -> Result<Prediction, SpamDetectorError> {
    let response: EndpointResponse = serde_json::from_str(body)?;

    let label = first_entry(&response.predicted_label, "predicted_label")?;
    let probability = first_entry(&response.predicted_probability, "predicted_probability")?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(SpamDetectorError::ClassifierResponseFormatError(format!(
            "predicted_probability {} is outside [0, 1]",
            probability
        )));
    }

    Ok(Prediction {
        label: SpamLabel::from_raw(label),
        probability,
    })
}

fn first_entry(values: &[Vec<f64>], field: &str) -> Result<f64, SpamDetectorError> {
    values
        .first()
        .and_then(|inner| inner.first())
        .copied()
        .ok_or_else(|| {
            SpamDetectorError::ClassifierResponseFormatError(format!("{} is empty", field))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_is_nested_json_array() {
        let body = build_request_body(&[vec![0.0, 2.0, 1.0]]).unwrap();
        assert_eq!(body, "[[0.0,2.0,1.0]]");
    }

    #[test]
    fn parses_spam_prediction() {
        let prediction =
            parse_prediction(r#"{"predicted_label": [[1.0]], "predicted_probability": [[0.97]]}"#)
                .unwrap();
        assert_eq!(prediction.label, SpamLabel::Spam);
        assert!((prediction.probability - 0.97).abs() < f64::EPSILON);
    }

    #[test]
    fn anything_but_one_is_ham() {
        let prediction = parse_prediction(
            r#"{"predicted_label": [[0.0, 1.0]], "predicted_probability": [[0.12, 0.88]]}"#,
        )
        .unwrap();
        assert_eq!(prediction.label, SpamLabel::Ham);
        assert!((prediction.probability - 0.12).abs() < f64::EPSILON);
    }

    #[test]
    fn integer_labels_are_accepted() {
        let prediction =
            parse_prediction(r#"{"predicted_label": [[1]], "predicted_probability": [[1]]}"#)
                .unwrap();
        assert_eq!(prediction.label, SpamLabel::Spam);
    }

    #[test]
    fn rejects_malformed_responses() {
        let bodies = [
            "not json",
            r#"{"predicted_label": [[1.0]]}"#,
            r#"{"predicted_label": [], "predicted_probability": [[0.5]]}"#,
            r#"{"predicted_label": [[]], "predicted_probability": [[0.5]]}"#,
            r#"{"predicted_label": [["spam"]], "predicted_probability": [[0.5]]}"#,
            r#"{"predicted_label": [[1.0]], "predicted_probability": [[1.5]]}"#,
        ];
        for body in bodies {
            assert!(
                matches!(
                    parse_prediction(body),
                    Err(SpamDetectorError::ClassifierResponseFormatError(_))
                ),
                "accepted {body}"
            );
        }
    }
}
