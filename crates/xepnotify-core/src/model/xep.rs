use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::Status;

/// Identity of a registry entry
///
/// Accepted XEPs are keyed by number, ProtoXEPs by their inbox name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum XepKey {
    Accepted(u32),
    Proto(String),
}

impl XepKey {
    pub fn number(&self) -> Option<u32> {
        match self {
            XepKey::Accepted(number) => Some(*number),
            XepKey::Proto(_) => None,
        }
    }

    pub fn proto_name(&self) -> Option<&str> {
        match self {
            XepKey::Accepted(_) => None,
            XepKey::Proto(name) => Some(name),
        }
    }

    /// Human label: `XEP-0045` for accepted XEPs, the inbox name otherwise
    pub fn label(&self) -> String {
        match self {
            XepKey::Accepted(number) => format!("XEP-{:04}", number),
            XepKey::Proto(name) => name.clone(),
        }
    }
}

impl fmt::Display for XepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XepKey::Accepted(number) => write!(f, "{:04}", number),
            XepKey::Proto(name) => write!(f, "proto:{}", name),
        }
    }
}

/// Most recent entry of a XEP's revision history
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LastRevision {
    pub version: Option<String>,
    pub date: Option<NaiveDate>,
    pub initials: Option<String>,
    pub remark: Option<String>,
}

/// One registry record as of a single snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XepInfo {
    pub key: XepKey,
    pub title: String,
    pub abstract_text: String,
    /// Document type, e.g. `Standards Track`
    pub doc_type: String,
    pub status: Status,
    pub approver: String,
    pub shortname: Option<String>,
    pub sig: Option<String>,
    /// End date of the current Last Call, if one was issued
    pub last_call: Option<NaiveDate>,
    pub last_revision: Option<LastRevision>,
}

impl XepInfo {
    /// Minimal record, mostly useful for building fixtures
    pub fn new(key: XepKey, title: impl Into<String>, status: Status) -> Self {
        Self {
            key,
            title: title.into(),
            abstract_text: String::new(),
            doc_type: String::new(),
            status,
            approver: String::new(),
            shortname: None,
            sig: None,
            last_call: None,
            last_revision: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.last_revision
            .get_or_insert_with(LastRevision::default)
            .version = Some(version.into());
        self
    }

    pub fn with_last_call(mut self, date: NaiveDate) -> Self {
        self.last_call = Some(date);
        self
    }

    /// Version string of the last revision, if any
    pub fn version(&self) -> Option<&str> {
        self.last_revision
            .as_ref()
            .and_then(|rev| rev.version.as_deref())
    }
}
