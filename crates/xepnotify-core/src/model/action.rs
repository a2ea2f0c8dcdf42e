use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::status::Status;
use crate::errors::XepError;

/// Kind of announcement produced for a registry change
///
/// At most one action is produced per XEP per comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Proto,
    New,
    Draft,
    Stable,
    Active,
    Final,
    Retract,
    Obsolete,
    Defer,
    Update,
    Deprecate,
    LastCall,
    Reject,
}

impl Action {
    pub const ALL: [Action; 13] = [
        Action::Proto,
        Action::New,
        Action::Draft,
        Action::Stable,
        Action::Active,
        Action::Final,
        Action::Retract,
        Action::Obsolete,
        Action::Defer,
        Action::Update,
        Action::Deprecate,
        Action::LastCall,
        Action::Reject,
    ];

    /// Default action announcing that a XEP has entered `status`
    pub fn from_status(status: Status) -> Action {
        match status {
            Status::Proto => Action::Proto,
            Status::Experimental => Action::New,
            Status::Proposed => Action::LastCall,
            Status::Draft => Action::Draft,
            Status::Stable => Action::Stable,
            Status::Active => Action::Active,
            Status::Final => Action::Final,
            Status::Retracted => Action::Retract,
            Status::Obsolete => Action::Obsolete,
            Status::Deferred => Action::Defer,
            Status::Rejected => Action::Reject,
            Status::Deprecated => Action::Deprecate,
        }
    }

    /// Label used as the subject prefix of announcements
    pub fn label(&self) -> &'static str {
        match self {
            Action::Proto => "Proposed XMPP Extension",
            Action::New => "NEW",
            Action::Draft => "DRAFT",
            Action::Stable => "STABLE",
            Action::Active => "ACTIVE",
            Action::Final => "FINAL",
            Action::Retract => "RETRACTED",
            Action::Obsolete => "OBSOLETED",
            Action::Defer => "DEFERRED",
            Action::Update => "UPDATED",
            Action::Deprecate => "DEPRECATED",
            Action::LastCall => "LAST CALL",
            Action::Reject => "REJECTED",
        }
    }

    /// Value of the `XSF-XEP-Action` header
    pub fn header_value(&self) -> &'static str {
        match self {
            Action::Proto => "PROTO",
            other => other.label(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = XepError;

    /// Parse an `XSF-XEP-Action` header value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.header_value() == s || action.label() == s)
            .ok_or_else(|| XepError::InvalidNotification {
                reason: format!("unknown action {:?}", s),
            })
    }
}
