//! XEP registry snapshots.
//!
//! A snapshot is the content of one `xeplist.xml` file, split into accepted
//! XEPs (keyed by number) and ProtoXEPs (keyed by inbox name).
//!
//! ```ignore
//! use xepnotify_core::registry::load_registry;
//!
//! let old = load_registry("old/xeplist.xml".as_ref())?;
//! let new = load_registry("new/xeplist.xml".as_ref())?;
//! ```

pub mod parser;

use std::collections::BTreeMap;

use crate::model::{XepInfo, XepKey};

pub use parser::{load_registry, parse_registry_str};

/// One parsed registry snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XepRegistry {
    pub accepted: BTreeMap<u32, XepInfo>,
    pub protos: BTreeMap<String, XepInfo>,
}

impl XepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own key, returning the record it replaced
    pub fn insert(&mut self, info: XepInfo) -> Option<XepInfo> {
        match info.key.clone() {
            XepKey::Accepted(number) => self.accepted.insert(number, info),
            XepKey::Proto(name) => self.protos.insert(name, info),
        }
    }

    pub fn len(&self) -> usize {
        self.accepted.len() + self.protos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.protos.is_empty()
    }
}

impl FromIterator<XepInfo> for XepRegistry {
    fn from_iter<I: IntoIterator<Item = XepInfo>>(iter: I) -> Self {
        let mut registry = XepRegistry::new();
        for info in iter {
            registry.insert(info);
        }
        registry
    }
}
