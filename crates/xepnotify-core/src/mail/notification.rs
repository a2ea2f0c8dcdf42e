//! Composed notifications and their textual form.

use chrono::{DateTime, Utc};

use crate::errors::{Result, XepError};
use crate::model::{Action, Status};

pub const HEADER_SUBJECT: &str = "Subject";
pub const HEADER_ACTION: &str = "XSF-XEP-Action";
pub const HEADER_TITLE: &str = "XSF-XEP-Title";
pub const HEADER_TYPE: &str = "XSF-XEP-Type";
pub const HEADER_STATUS: &str = "XSF-XEP-Status";
pub const HEADER_NUMBER: &str = "XSF-XEP-Number";
pub const HEADER_URL: &str = "XSF-XEP-Url";
pub const HEADER_APPROVER: &str = "XSF-XEP-Approver";

/// Machine-readable facts about the announced XEP, carried as `XSF-XEP-*` headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMetadata {
    pub action: Action,
    pub title: String,
    pub doc_type: String,
    pub status: Status,
    pub number: Option<u32>,
    pub url: String,
    pub approver: Option<String>,
}

impl NotificationMetadata {
    /// `XSF-XEP-*` headers in emission order
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            (HEADER_ACTION, self.action.header_value().to_string()),
            (HEADER_TITLE, self.title.clone()),
            (HEADER_TYPE, self.doc_type.clone()),
            (HEADER_STATUS, self.status.as_str().to_string()),
        ];
        if let Some(number) = self.number {
            headers.push((HEADER_NUMBER, format!("{:04}", number)));
        }
        headers.push((HEADER_URL, self.url.clone()));
        if let Some(approver) = &self.approver {
            headers.push((HEADER_APPROVER, approver.clone()));
        }
        headers
    }

    /// Read the metadata back from a rendered notification
    ///
    /// Only the header block (up to the first empty line) is inspected.
    /// Folded header lines are unfolded.
    ///
    /// # Errors
    ///
    /// `InvalidNotification` if a required header is missing or malformed.
    pub fn parse(text: &str) -> Result<Self> {
        let headers = parse_header_block(text);
        let get = |name: &str| header_value(&headers, name);
        let require = |name: &str| {
            header_value(&headers, name).ok_or_else(|| XepError::InvalidNotification {
                reason: format!("missing {} header", name),
            })
        };

        let status = require(HEADER_STATUS)?
            .parse::<Status>()
            .map_err(|e| XepError::InvalidNotification {
                reason: e.to_string(),
            })?;
        let number = get(HEADER_NUMBER)
            .map(|value| {
                value
                    .parse::<u32>()
                    .map_err(|_| XepError::InvalidNotification {
                        reason: format!("invalid {} header {:?}", HEADER_NUMBER, value),
                    })
            })
            .transpose()?;

        Ok(Self {
            action: require(HEADER_ACTION)?.parse()?,
            title: require(HEADER_TITLE)?.to_string(),
            doc_type: get(HEADER_TYPE).unwrap_or_default().to_string(),
            status,
            number,
            url: require(HEADER_URL)?.to_string(),
            approver: get(HEADER_APPROVER).map(str::to_string),
        })
    }
}

/// Addressing information added at send time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from: Option<String>,
    pub to: Vec<String>,
    pub date: DateTime<Utc>,
}

impl Envelope {
    pub fn new(from: Option<String>, to: Vec<String>) -> Self {
        Self {
            from,
            to,
            date: Utc::now(),
        }
    }
}

/// A fully composed announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub metadata: NotificationMetadata,
    /// Wrapped plain-text body
    pub body: String,
}

impl Notification {
    /// All headers of the message as it will be shown and sent
    pub fn headers(&self, envelope: &Envelope) -> Vec<(String, String)> {
        let mut headers = vec![(HEADER_SUBJECT.to_string(), self.subject.clone())];
        headers.extend(
            self.metadata
                .headers()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value)),
        );
        headers.push(("Date".to_string(), envelope.date.to_rfc2822()));
        if let Some(from) = &envelope.from {
            headers.push(("From".to_string(), from.clone()));
        }
        headers.push(("To".to_string(), envelope.to.join(", ")));
        headers.push((
            "Content-Type".to_string(),
            "text/plain; charset=\"utf-8\"".to_string(),
        ));
        headers
    }

    /// RFC 5322-style text used for dry runs and the confirmation prompt
    pub fn render(&self, envelope: &Envelope) -> String {
        let mut out = String::new();
        for (name, value) in self.headers(envelope) {
            out.push_str(&name);
            out.push_str(": ");
            out.push_str(&value);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.body);
        if !self.body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn parse_header_block(text: &str) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            break;
        }
        if line.starts_with([' ', '\t']) {
            if let Some((_, value)) = headers.last_mut() {
                value.push(' ');
                value.push_str(line.trim());
            }
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}
