//! Structured logging facility for xepnotify
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! All output goes to stderr: stdout is reserved for dry-run mail output and
//! the confirmation dialogue.
//!
//! # Usage
//!
//! ```rust
//! use xepnotify_core::logging_facility::{init, Profile};
//!
//! init(Profile::Interactive);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
