//! Core types shared across the xepnotify crates
//!
//! - **Schema constants**: canonical structured-logging field keys and event names
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction of SMTP secrets

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
