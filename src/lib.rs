//! Spam Detector - an AWS Lambda that classifies inbound emails and replies with the verdict.
//!
//! The function is triggered by an S3 object-created notification for an email
//! stored by SES inbound receipt rules. For each invocation it:
//! 1. Fetches the raw email from S3
//! 2. Extracts the sent date, sender, subject and plain-text body
//! 3. Turns the body into a bag-of-words feature vector
//! 4. Classifies the vector with a SageMaker inference endpoint
//! 5. Emails the sender a summary of the verdict through SES
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - S3 for the stored emails
//! - SageMaker Runtime for spam classification
//! - SES for the reply
//! - Tokio for async runtime
//!
//! External services are reached through the [`clients::ObjectStore`],
//! [`clients::Classifier`] and [`clients::Mailer`] traits so the pipeline can
//! run against in-memory implementations.
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use spam_detector::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     spam_detector::setup_logging();
//!
//!     let detector = spam_detector::worker::build_detector(AppConfig::default()).await;
//!     let event = json!({
//!         "Records": [{
//!             "s3": {
//!                 "bucket": { "name": "inbox" },
//!                 "object": { "key": "msg1.eml" }
//!             }
//!         }]
//!     });
//!
//!     let status = detector.process_event(&event).await?;
//!     println!("Detector finished: {}", status);
//!
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod core;
pub mod email;
pub mod errors;
pub mod vectorizer;
pub mod worker;

pub use errors::SpamDetectorError;
pub use worker::Detector;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at the start of the Lambda binary; later calls are
/// ignored.
///
/// # Example
///
/// ```
/// spam_detector::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
