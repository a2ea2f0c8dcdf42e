//! Change classifier.
//!
//! [`diff_infos`] maps a pair of records for the same XEP to at most one
//! [`Action`]. Branches are evaluated in a fixed priority order and the
//! first match wins.

use crate::model::{Action, Status, XepInfo};

/// Classify the change between two snapshots of one XEP
///
/// `old` is `None` when the XEP did not exist in the previous snapshot; its
/// status then differs from every real status.
///
/// Returns `None` when nothing reportable changed.
pub fn diff_infos(old: Option<&XepInfo>, new: &XepInfo) -> Option<Action> {
    let old_status = old.map(|info| info.status);

    if old_status != Some(new.status) {
        return match (old_status, new.status) {
            (_, Status::Proto) => Some(Action::Proto),
            (None, _) => Some(Action::New),
            // a revived document is announced as an update
            (Some(Status::Deferred), Status::Experimental) => Some(Action::Update),
            // proposals falling back to experimental are not announced
            (Some(Status::Proposed), Status::Experimental) => None,
            (Some(_), status) => Some(Action::from_status(status)),
        };
    }

    // statuses are equal, so `old` is present from here on
    let old = old?;

    if old.status == Status::Proposed && old.last_call != new.last_call {
        return Some(Action::LastCall);
    }

    if old.version() != new.version() {
        return Some(Action::Update);
    }

    None
}
