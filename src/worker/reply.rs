//! Composition of the results email sent back to the sender.

use crate::core::config::AppConfig;
use crate::core::models::{Notification, ParsedEmail, Prediction};

/// Number of body characters quoted in the reply.
pub const EXCERPT_CHARS: usize = 240;

/// Renders `probability` as a whole percentage, truncated toward zero.
///
/// The decimal rendering of `probability * 100` is cut at the decimal point,
/// so `0.8675` gives `"86"`, never `"87"`.
///
/// # Examples
///
/// ```
/// use spam_detector::worker::reply::confidence_percent;
///
/// assert_eq!(confidence_percent(0.8675), "86");
/// assert_eq!(confidence_percent(1.0), "100");
/// ```
#[must_use]
pub fn confidence_percent(probability: f64) -> String {
    let rendered = (probability * 100.0).to_string();
    rendered.split('.').next().unwrap_or_default().to_string()
}

/// The first [`EXCERPT_CHARS`] characters of `body`, or all of it when shorter.
#[must_use]
pub fn body_excerpt(body: &str) -> &str {
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}

#[must_use]
pub fn format_reply_body(email: &ParsedEmail, body: &str, prediction: &Prediction) -> String {
    format!(
        "We received your email sent on {} at {} with the subject {}.\n\n\
         Here is a {} character sample of the email body:\n\
         {}\n\n\
         The email was categorized as {} with a {}% confidence.",
        email.sent_at.date(),
        email.sent_at.time(),
        email.subject,
        EXCERPT_CHARS,
        body_excerpt(body),
        prediction.label,
        confidence_percent(prediction.probability)
    )
}

/// Builds the reply addressed to the email's sender.
///
/// `body` is the normalized plain-text body the prediction was made on.
#[must_use]
pub fn build_notification(
    config: &AppConfig,
    email: &ParsedEmail,
    body: &str,
    prediction: &Prediction,
) -> Notification {
    Notification {
        from: config.source_address.clone(),
        to: email.sender.clone(),
        subject: config.reply_subject.clone(),
        body: format_reply_body(email, body, prediction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{EmailBody, SpamLabel};
    use chrono::NaiveDate;

    fn email() -> ParsedEmail {
        ParsedEmail {
            sent_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            recipient: Some("detector@example.com".to_string()),
            sender: "alice@example.com".to_string(),
            subject: "Test".to_string(),
            body: EmailBody::Simple("buy cheap pills now".to_string()),
        }
    }

    #[test]
    fn truncates_rather_than_rounds() {
        assert_eq!(confidence_percent(0.8675), "86");
        assert_eq!(confidence_percent(0.999), "99");
        assert_eq!(confidence_percent(0.97), "97");
        assert_eq!(confidence_percent(0.0), "0");
        assert_eq!(confidence_percent(0.004), "0");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let body = "é".repeat(300);
        let excerpt = body_excerpt(&body);
        assert_eq!(excerpt.chars().count(), 240);
        assert_eq!(body_excerpt("short"), "short");
    }

    #[test]
    fn reply_has_four_parts() {
        let prediction = Prediction {
            label: SpamLabel::Spam,
            probability: 0.97,
        };
        let body = format_reply_body(&email(), "buy cheap pills now", &prediction);
        assert_eq!(
            body,
            "We received your email sent on 2024-01-01 at 10:00:00 with the subject Test.\n\n\
             Here is a 240 character sample of the email body:\n\
             buy cheap pills now\n\n\
             The email was categorized as SPAM with a 97% confidence."
        );
    }

    #[test]
    fn notification_goes_back_to_sender() {
        let prediction = Prediction {
            label: SpamLabel::Ham,
            probability: 0.5,
        };
        let notification =
            build_notification(&AppConfig::default(), &email(), "hello", &prediction);
        assert_eq!(notification.to, "alice@example.com");
        assert_eq!(notification.from, "regan@reganjbragg.tech");
        assert_eq!(notification.subject, "Spam Detector Results");
        assert!(notification.body.ends_with("categorized as HAM with a 50% confidence."));
    }
}
