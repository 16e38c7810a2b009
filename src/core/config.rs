pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_ENDPOINT_NAME: &str = "sms-spam-classifier-mxnet-2022-11-17-23-51-03-470";
pub const DEFAULT_VOCABULARY_LENGTH: usize = 9013;
pub const DEFAULT_SOURCE_ADDRESS: &str = "regan@reganjbragg.tech";
pub const REPLY_SUBJECT: &str = "Spam Detector Results";

/// Compiled-in settings of the detector. There are no runtime overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Region the SES client is pinned to.
    pub region: String,
    pub endpoint_name: String,
    /// Number of token slots the classifier was trained with.
    pub vocabulary_length: usize,
    pub source_address: String,
    pub reply_subject: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_name: DEFAULT_ENDPOINT_NAME.to_string(),
            vocabulary_length: DEFAULT_VOCABULARY_LENGTH,
            source_address: DEFAULT_SOURCE_ADDRESS.to_string(),
            reply_subject: REPLY_SUBJECT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_compiled_in_constants() {
        let config = AppConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(
            config.endpoint_name,
            "sms-spam-classifier-mxnet-2022-11-17-23-51-03-470"
        );
        assert_eq!(config.vocabulary_length, 9013);
        assert_eq!(config.source_address, "regan@reganjbragg.tech");
        assert_eq!(config.reply_subject, "Spam Detector Results");
    }
}
