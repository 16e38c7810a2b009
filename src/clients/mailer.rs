//! Outbound email delivery through SES

use async_trait::async_trait;
use aws_sdk_ses::Client as SesClient;
use aws_sdk_ses::error::DisplayErrorContext;
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use tracing::info;

use crate::core::models::Notification;
use crate::errors::SpamDetectorError;

pub const CHARSET: &str = "UTF-8";

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), SpamDetectorError>;
}

pub struct SesMailer {
    client: SesClient,
}

impl SesMailer {
    pub fn new(client: SesClient) -> Self {
        Self { client }
    }
}

fn content(data: &str) -> Result<Content, SpamDetectorError> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|e| SpamDetectorError::NotificationSendError(format!("SES content build error: {}", e)))
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, notification: &Notification) -> Result<(), SpamDetectorError> {
        let message = Message::builder()
            .subject(content(&notification.subject)?)
            .body(Body::builder().text(content(&notification.body)?).build())
            .build();
        let destination = Destination::builder()
            .to_addresses(notification.to.clone())
            .build();

        let output = self
            .client
            .send_email()
            .source(&notification.from)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| {
                SpamDetectorError::NotificationSendError(format!(
                    "to {}: {}",
                    notification.to,
                    DisplayErrorContext(&e)
                ))
            })?;

        info!(
            "Sent results to {} (message_id={:?})",
            notification.to,
            output.message_id()
        );
        Ok(())
    }
}
