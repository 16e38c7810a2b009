use std::sync::Arc;

use aws_sdk_ses::config::Region;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::detect::Detector;
use crate::clients::{SageMakerClassifier, S3ObjectStore, SesMailer};
use crate::core::config::AppConfig;

/// Builds a [`Detector`] backed by S3, SageMaker Runtime and SES.
///
/// SES is pinned to `config.region`; the other clients use the ambient AWS configuration.
pub async fn build_detector(config: AppConfig) -> Detector {
    let shared_config = aws_config::from_env().load().await;

    let s3 = aws_sdk_s3::Client::new(&shared_config);
    let sagemaker = aws_sdk_sagemakerruntime::Client::new(&shared_config);
    let ses_config = aws_sdk_ses::config::Builder::from(&shared_config)
        .region(Region::new(config.region.clone()))
        .build();
    let ses = aws_sdk_ses::Client::from_conf(ses_config);

    let classifier = SageMakerClassifier::new(sagemaker, config.endpoint_name.clone());
    Detector::new(
        config,
        Arc::new(S3ObjectStore::new(s3)),
        Arc::new(classifier),
        Arc::new(SesMailer::new(ses)),
    )
}

/// Lambda handler for S3 object-created notifications.
///
/// Failures are boxed unchanged so the runtime reports the original error.
pub async fn function_handler(
    detector: &Detector,
    event: LambdaEvent<Value>,
) -> Result<&'static str, Error> {
    info!(
        "Received S3 event (request_id={}): {}",
        event.context.request_id, event.payload
    );

    detector
        .process_event(&event.payload)
        .await
        .map_err(Error::from)
}

pub use self::function_handler as handler;
