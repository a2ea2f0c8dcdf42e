use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::XepError;

/// Lifecycle status of a XEP as recorded in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    Proto,
    Experimental,
    Proposed,
    Draft,
    Stable,
    Active,
    Final,
    Retracted,
    Obsolete,
    Deferred,
    Rejected,
    Deprecated,
}

impl Status {
    /// Every status, in registry lifecycle order
    pub const ALL: [Status; 12] = [
        Status::Proto,
        Status::Experimental,
        Status::Proposed,
        Status::Draft,
        Status::Stable,
        Status::Active,
        Status::Final,
        Status::Retracted,
        Status::Obsolete,
        Status::Deferred,
        Status::Rejected,
        Status::Deprecated,
    ];

    /// Registry spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Proto => "ProtoXEP",
            Status::Experimental => "Experimental",
            Status::Proposed => "Proposed",
            Status::Draft => "Draft",
            Status::Stable => "Stable",
            Status::Active => "Active",
            Status::Final => "Final",
            Status::Retracted => "Retracted",
            Status::Obsolete => "Obsolete",
            Status::Deferred => "Deferred",
            Status::Rejected => "Rejected",
            Status::Deprecated => "Deprecated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = XepError;

    /// Parse the registry spelling. `Proto` and any casing of `ProtoXEP`
    /// are accepted for proto documents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "Proto" || s.eq_ignore_ascii_case("protoxep") {
            return Ok(Status::Proto);
        }
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| XepError::InvalidStatus {
                value: s.to_string(),
            })
    }
}
