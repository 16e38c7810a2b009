use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpamDetectorError {
    #[error("Malformed S3 event: {0}")]
    MalformedEventError(String),

    #[error("Failed to fetch email from S3: {0}")]
    StorageFetchError(String),

    #[error("Failed to parse email: {0}")]
    EmailParseError(String),

    #[error("Failed to parse email Date header: {0}")]
    DateParseError(String),

    #[error("Failed to invoke SageMaker endpoint: {0}")]
    ClassifierInvocationError(String),

    #[error("Unexpected SageMaker response: {0}")]
    ClassifierResponseFormatError(String),

    #[error("Failed to send notification through SES: {0}")]
    NotificationSendError(String),
}

impl SpamDetectorError {
    /// Pipeline stage that produced the error, used as a structured log field.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::MalformedEventError(_) => "received",
            Self::StorageFetchError(_) => "fetch",
            Self::EmailParseError(_) | Self::DateParseError(_) => "parse",
            Self::ClassifierInvocationError(_) | Self::ClassifierResponseFormatError(_) => {
                "classify"
            }
            Self::NotificationSendError(_) => "notify",
        }
    }
}

impl From<serde_json::Error> for SpamDetectorError {
    fn from(error: serde_json::Error) -> Self {
        SpamDetectorError::ClassifierResponseFormatError(error.to_string())
    }
}
