//! Notification composition.
//!
//! [`compose`] turns a classified change into a [`Notification`]: subject,
//! `XSF-XEP-*` metadata headers and a wrapped plain-text body.

pub mod compose;
pub mod notification;
pub mod templates;
pub mod wrap;

pub use compose::{changelog, compose, xep_url, XEP_URL_PREFIX};
pub use notification::{Envelope, Notification, NotificationMetadata};
pub use wrap::wrap_text;
