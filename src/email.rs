//! Raw email parsing: headers, sent timestamp, sender address and body text

use chrono::NaiveDateTime;
use mailparse::{MailHeaderMap, ParsedMail};
use tracing::debug;

use crate::core::models::{BodyPart, EmailBody, ParsedEmail};
use crate::errors::SpamDetectorError;

/// Layout of the `Date` header once the timezone has been stripped.
pub const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// `<weekday>,` `<day>` `<month>` `<year>` `<time>`; anything after is zone info.
const DATE_TOKENS: usize = 5;

/// Parses a raw RFC 5322 message into the fields the detector needs.
///
/// # Errors
///
/// Returns `EmailParseError` when the message cannot be parsed or has no
/// `From` header, and `DateParseError` when `Date` is missing or malformed.
pub fn parse_email(raw: &str) -> Result<ParsedEmail, SpamDetectorError> {
    let mail = mailparse::parse_mail(raw.as_bytes())
        .map_err(|e| SpamDetectorError::EmailParseError(e.to_string()))?;

    let date = header(&mail, "Date")
        .ok_or_else(|| SpamDetectorError::DateParseError("missing Date header".to_string()))?;
    let sent_at = parse_sent_at(&date)?;

    let from = header(&mail, "From")
        .ok_or_else(|| SpamDetectorError::EmailParseError("missing From header".to_string()))?;

    Ok(ParsedEmail {
        sent_at,
        recipient: header(&mail, "To"),
        sender: extract_sender_address(&from),
        subject: header(&mail, "Subject").unwrap_or_default(),
        body: extract_body(&mail)?,
    })
}

fn header(mail: &ParsedMail, name: &str) -> Option<String> {
    mail.headers
        .get_first_value(name)
        .map(|v| v.trim().to_string())
}

/// Parses a `Date` header value such as `Mon, 1 Jan 2024 10:00:00 -0500`.
///
/// The timezone offset and any trailing comment are dropped; the result is
/// the naive wall-clock time as written by the sender.
///
/// # Errors
///
/// Returns `DateParseError` when the value does not match [`DATE_FORMAT`].
pub fn parse_sent_at(value: &str) -> Result<NaiveDateTime, SpamDetectorError> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.len() < DATE_TOKENS {
        return Err(SpamDetectorError::DateParseError(format!(
            "unexpected Date header '{}'",
            value
        )));
    }
    let naive = tokens[..DATE_TOKENS].join(" ");

    NaiveDateTime::parse_from_str(&naive, DATE_FORMAT).map_err(|e| {
        SpamDetectorError::DateParseError(format!("'{}' does not match {}: {}", value, DATE_FORMAT, e))
    })
}

/// Extracts the sender address from a `From` header value.
///
/// With angle brackets, this keeps everything after the first `<` except the
/// final character (`Alice <alice@example.com>` becomes `alice@example.com`).
/// Without them, the first and last characters are dropped. This is a plain
/// substring rule, not address parsing: trailing text after `>` is cut by one
/// character only.
#[must_use]
pub fn extract_sender_address(from: &str) -> String {
    let chars: Vec<char> = from.chars().collect();
    let start = chars
        .iter()
        .position(|&c| c == '<')
        .map_or(1, |pos| pos + 1);
    let end = chars.len().saturating_sub(1);

    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect()
}

fn extract_body(mail: &ParsedMail) -> Result<EmailBody, SpamDetectorError> {
    if mail.subparts.is_empty() {
        let text = mail
            .get_body()
            .map_err(|e| SpamDetectorError::EmailParseError(e.to_string()))?;
        return Ok(EmailBody::Simple(text));
    }

    let mut parts = Vec::new();
    collect_leaf_parts(mail, &mut parts)?;
    Ok(EmailBody::Multipart(parts))
}

fn collect_leaf_parts(mail: &ParsedMail, parts: &mut Vec<BodyPart>) -> Result<(), SpamDetectorError> {
    for part in &mail.subparts {
        if !part.subparts.is_empty() {
            collect_leaf_parts(part, parts)?;
            continue;
        }

        let content_type = part.ctype.mimetype.to_ascii_lowercase();
        let text = match part.get_body() {
            Ok(text) => text,
            Err(e) if content_type == "text/plain" => {
                return Err(SpamDetectorError::EmailParseError(e.to_string()));
            }
            Err(e) => {
                debug!("Skipping undecodable {} part: {}", content_type, e);
                String::new()
            }
        };
        parts.push(BodyPart { content_type, text });
    }
    Ok(())
}

/// Flattens the body onto one line: every `\r` and `\n` becomes a space.
#[must_use]
pub fn normalize_body(body: &str) -> String {
    body.replace(['\r', '\n'], " ")
}
