//! Object storage access for stored emails

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;
use tracing::info;

use crate::core::models::ObjectLocation;
use crate::errors::SpamDetectorError;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Returns the raw bytes stored at `location`.
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, SpamDetectorError>;
}

pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, SpamDetectorError> {
        let output = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| {
                SpamDetectorError::StorageFetchError(format!(
                    "s3://{}/{}: {}",
                    location.bucket,
                    location.key,
                    DisplayErrorContext(&e)
                ))
            })?;

        let bytes = output.body.collect().await.map_err(|e| {
            SpamDetectorError::StorageFetchError(format!(
                "Failed to read body of s3://{}/{}: {}",
                location.bucket, location.key, e
            ))
        })?;
        let bytes = bytes.into_bytes().to_vec();

        info!(
            "Fetched {} bytes from s3://{}/{}",
            bytes.len(),
            location.bucket,
            location.key
        );
        Ok(bytes)
    }
}
