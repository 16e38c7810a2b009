// Lambda bootstrap entry point for the spam detector function

use lambda_runtime::{Error, run, service_fn};
use spam_detector::core::config::AppConfig;
use spam_detector::worker::{build_detector, handler};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    spam_detector::setup_logging();

    let config = AppConfig::default();
    info!(
        "Starting spam detector (endpoint={}, vocabulary_length={})",
        config.endpoint_name, config.vocabulary_length
    );

    // Clients are created once per cold start and reused by every invocation.
    let detector = build_detector(config).await;
    run(service_fn(|event| handler(&detector, event))).await
}
