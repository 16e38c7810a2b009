use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::core::models::ObjectLocation;
use crate::errors::SpamDetectorError;

/// Decodes an S3 notification object key: `+` is a space, `%XX` an escaped byte.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
#[must_use]
pub fn decode_object_key(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// Extracts the bucket and decoded key from the first record of an S3 event.
///
/// # Errors
///
/// Returns `MalformedEventError` if the record, bucket name or object key is absent.
pub fn parse_event(payload: &Value) -> Result<ObjectLocation, SpamDetectorError> {
    let s3 = payload
        .get("Records")
        .and_then(|records| records.as_array())
        .and_then(|records| records.first())
        .and_then(|record| record.get("s3"))
        .ok_or_else(|| {
            SpamDetectorError::MalformedEventError("no S3 record in event".to_string())
        })?;

    let bucket = s3
        .get("bucket")
        .and_then(|bucket| bucket.get("name"))
        .and_then(|name| name.as_str())
        .ok_or_else(|| SpamDetectorError::MalformedEventError("missing bucket name".to_string()))?;

    let key = s3
        .get("object")
        .and_then(|object| object.get("key"))
        .and_then(|key| key.as_str())
        .ok_or_else(|| SpamDetectorError::MalformedEventError("missing object key".to_string()))?;

    Ok(ObjectLocation {
        bucket: bucket.to_string(),
        key: decode_object_key(key),
    })
}
