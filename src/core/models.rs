use chrono::NaiveDateTime;
use std::fmt;

/// Bucket and decoded key of the stored email that triggered the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPart {
    pub content_type: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Simple(String),
    /// Leaf parts of a multipart message, in document order.
    Multipart(Vec<BodyPart>),
}

impl EmailBody {
    /// The plain-text body: the single body, or the first `text/plain` part.
    #[must_use]
    pub fn plain_text(&self) -> &str {
        match self {
            EmailBody::Simple(text) => text,
            EmailBody::Multipart(parts) => parts
                .iter()
                .find(|part| part.content_type.eq_ignore_ascii_case("text/plain"))
                .map_or("", |part| part.text.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEmail {
    pub sent_at: NaiveDateTime,
    pub recipient: Option<String>,
    pub sender: String,
    pub subject: String,
    pub body: EmailBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpamLabel {
    Spam,
    Ham,
}

impl SpamLabel {
    /// The classifier emits `1.0` for spam and anything else for ham.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_raw(value: f64) -> Self {
        if value == 1.0 {
            SpamLabel::Spam
        } else {
            SpamLabel::Ham
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SpamLabel::Spam => "SPAM",
            SpamLabel::Ham => "HAM",
        }
    }
}

impl fmt::Display for SpamLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: SpamLabel,
    /// Probability in `[0, 1]` reported for the predicted label.
    pub probability: f64,
}

/// Reply email sent back to the original sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}
