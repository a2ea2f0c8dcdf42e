pub mod action;
pub mod status;
pub mod xep;

pub use action::Action;
pub use status::Status;
pub use xep::{LastRevision, XepInfo, XepKey};
