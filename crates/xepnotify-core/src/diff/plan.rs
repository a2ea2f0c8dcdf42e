//! Update planner.
//!
//! Walks two registry snapshots and queues one [`PendingUpdate`] per XEP
//! whose change is worth announcing.

use std::time::Instant;

use crate::diff::engine::diff_infos;
use crate::diff::significance::{is_significant, BumpFilter};
use crate::model::{Action, XepInfo, XepKey};
use crate::registry::XepRegistry;
use crate::{log_op_end, log_op_start};

/// Caller-selected planning options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Announce ProtoXEPs that appeared in the new snapshot
    pub include_protoxep: bool,
    pub bump_filter: BumpFilter,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            include_protoxep: true,
            bump_filter: BumpFilter::default(),
        }
    }
}

/// A queued announcement; `info` is the record from the new snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpdate<'a> {
    pub key: XepKey,
    pub action: Action,
    pub info: &'a XepInfo,
}

/// Compute the announcements for the change from `old` to `new`
///
/// Order: XEPs present in both snapshots, then newly accepted XEPs (both by
/// number), then new ProtoXEPs by name. XEPs that vanished from the new
/// snapshot are never announced.
pub fn collect_updates<'a>(
    old: &XepRegistry,
    new: &'a XepRegistry,
    options: &PlanOptions,
) -> Vec<PendingUpdate<'a>> {
    let start = Instant::now();
    log_op_start!(
        "collect_updates",
        old_len = old.len(),
        new_len = new.len(),
        include_protoxep = options.include_protoxep
    );

    let mut updates = Vec::new();

    for (number, new_info) in &new.accepted {
        let Some(old_info) = old.accepted.get(number) else {
            continue;
        };
        let Some(action) = diff_infos(Some(old_info), new_info) else {
            continue;
        };
        if action == Action::Update
            && !is_significant(old_info.version(), new_info.version(), options.bump_filter)
        {
            tracing::debug!(
                xep = %new_info.key,
                old_version = old_info.version(),
                new_version = new_info.version(),
                "version bump filtered out"
            );
            continue;
        }
        push(&mut updates, action, new_info);
    }

    for (number, new_info) in &new.accepted {
        if old.accepted.contains_key(number) {
            continue;
        }
        if let Some(action) = diff_infos(None, new_info) {
            push(&mut updates, action, new_info);
        }
    }

    if options.include_protoxep {
        for (name, new_info) in &new.protos {
            if old.protos.contains_key(name) {
                continue;
            }
            if let Some(action) = diff_infos(None, new_info) {
                push(&mut updates, action, new_info);
            }
        }
    }

    log_op_end!(
        "collect_updates",
        duration_ms = start.elapsed().as_millis() as u64,
        updates_len = updates.len()
    );
    updates
}

fn push<'a>(updates: &mut Vec<PendingUpdate<'a>>, action: Action, info: &'a XepInfo) {
    tracing::debug!(xep = %info.key, action = %action, status = %info.status, "queued update");
    updates.push(PendingUpdate {
        key: info.key.clone(),
        action,
        info,
    });
}
