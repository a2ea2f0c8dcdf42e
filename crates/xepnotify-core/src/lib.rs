//! xepnotify core - registry diffing and announcement composition
//!
//! This crate provides everything that does not touch a terminal or a
//! network connection:
//! - XEP registry model (`Status`, `Action`, `XepInfo`) and `xeplist.xml` parsing
//! - Change classification between two registry snapshots
//! - Editorial / non-editorial significance filtering of version bumps
//! - Update planning across whole snapshots
//! - Notification composition from fixed templates
//! - Error and logging facilities shared with the CLI

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod mail;
pub mod model;
pub mod registry;

#[doc(hidden)]
pub use xepnotify_core_types as core_types;

// Re-export commonly used types
pub use diff::{collect_updates, diff_infos, is_significant, BumpFilter, PendingUpdate, PlanOptions};
pub use errors::{ExError, ExErrorKind, Result, XepError};
pub use mail::{compose, Envelope, Notification, NotificationMetadata};
pub use model::{Action, LastRevision, Status, XepInfo, XepKey};
pub use registry::{load_registry, parse_registry_str, XepRegistry};
