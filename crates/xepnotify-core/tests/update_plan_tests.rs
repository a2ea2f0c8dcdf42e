//! Update planner tests over whole registry snapshots.

mod common;

use common::{accepted, date, proto};
use xepnotify_core::{
    collect_updates, Action, BumpFilter, PlanOptions, Status, XepKey, XepRegistry,
};

fn registry(infos: Vec<xepnotify_core::XepInfo>) -> XepRegistry {
    infos.into_iter().collect()
}

fn summary(old: &XepRegistry, new: &XepRegistry, options: &PlanOptions) -> Vec<(XepKey, Action)> {
    collect_updates(old, new, options)
        .into_iter()
        .map(|update| (update.key, update.action))
        .collect()
}

#[test]
fn test_identical_snapshots_produce_nothing() {
    let old = registry(vec![
        accepted(1, Status::Active, "1.0.0"),
        proto("mix-misc"),
    ]);
    let new = old.clone();
    assert!(collect_updates(&old, &new, &PlanOptions::default()).is_empty());
}

#[test]
fn test_groups_are_ordered_changed_added_proto() {
    let old = registry(vec![
        accepted(30, Status::Experimental, "0.1.0"),
        accepted(10, Status::Experimental, "0.1.0"),
    ]);
    let new = registry(vec![
        proto("zeta"),
        accepted(5, Status::Experimental, "0.1.0"),
        accepted(30, Status::Proposed, "0.1.0"),
        proto("alpha"),
        accepted(10, Status::Experimental, "0.2.0"),
        accepted(400, Status::Experimental, "0.1.0"),
    ]);

    assert_eq!(
        summary(&old, &new, &PlanOptions::default()),
        vec![
            (XepKey::Accepted(10), Action::Update),
            (XepKey::Accepted(30), Action::LastCall),
            (XepKey::Accepted(5), Action::New),
            (XepKey::Accepted(400), Action::New),
            (XepKey::Proto("alpha".to_string()), Action::Proto),
            (XepKey::Proto("zeta".to_string()), Action::Proto),
        ]
    );
}

#[test]
fn test_vanished_xeps_are_not_announced() {
    let old = registry(vec![
        accepted(1, Status::Active, "1.0.0"),
        accepted(2, Status::Experimental, "0.1.0"),
        proto("gone"),
    ]);
    let new = registry(vec![accepted(1, Status::Active, "1.0.0")]);
    assert!(collect_updates(&old, &new, &PlanOptions::default()).is_empty());
}

#[test]
fn test_existing_protos_are_not_reannounced() {
    let old = registry(vec![proto("mix-misc")]);
    let mut changed = proto("mix-misc");
    changed.title = "Retitled".to_string();
    let new = registry(vec![changed]);
    assert!(collect_updates(&old, &new, &PlanOptions::default()).is_empty());
}

#[test]
fn test_no_proto_option_skips_new_protos() {
    let old = registry(vec![]);
    let new = registry(vec![proto("mix-misc"), accepted(9, Status::Experimental, "0.1.0")]);
    let options = PlanOptions {
        include_protoxep: false,
        ..PlanOptions::default()
    };
    assert_eq!(
        summary(&old, &new, &options),
        vec![(XepKey::Accepted(9), Action::New)]
    );
}

#[test]
fn test_editorial_bumps_filtered_out() {
    let old = registry(vec![
        accepted(1, Status::Stable, "1.2.3"),
        accepted(2, Status::Stable, "1.2.3"),
    ]);
    let new = registry(vec![
        accepted(1, Status::Stable, "1.2.4"),
        accepted(2, Status::Stable, "1.3.0"),
    ]);
    let options = PlanOptions {
        bump_filter: BumpFilter {
            include_editorial: false,
            include_non_editorial: true,
        },
        ..PlanOptions::default()
    };
    assert_eq!(
        summary(&old, &new, &options),
        vec![(XepKey::Accepted(2), Action::Update)]
    );
}

#[test]
fn test_filter_never_touches_status_changes() {
    let old = registry(vec![accepted(1, Status::Stable, "1.2.3")]);
    let new = registry(vec![accepted(1, Status::Final, "1.2.4")]);
    let options = PlanOptions {
        bump_filter: BumpFilter {
            include_editorial: false,
            include_non_editorial: false,
        },
        ..PlanOptions::default()
    };
    assert_eq!(
        summary(&old, &new, &options),
        vec![(XepKey::Accepted(1), Action::Final)]
    );
}

#[test]
fn test_pending_update_points_at_new_record() {
    let old = registry(vec![accepted(459, Status::Proposed, "0.2.0")]);
    let new = registry(vec![
        accepted(459, Status::Proposed, "0.2.0").with_last_call(date(2024, 6, 30))
    ]);
    let updates = collect_updates(&old, &new, &PlanOptions::default());
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].info.last_call, Some(date(2024, 6, 30)));
    assert!(std::ptr::eq(updates[0].info, &new.accepted[&459]));
}

#[test]
fn test_bump_filter_never_drops_new_xeps_or_protos() {
    let old = registry(vec![]);
    let new = registry(vec![
        accepted(501, Status::Experimental, "0.1.0"),
        proto("mix-misc"),
    ]);
    let options = PlanOptions {
        bump_filter: BumpFilter {
            include_editorial: false,
            include_non_editorial: false,
        },
        ..PlanOptions::default()
    };
    assert_eq!(
        summary(&old, &new, &options),
        vec![
            (XepKey::Accepted(501), Action::New),
            (XepKey::Proto("mix-misc".to_string()), Action::Proto),
        ]
    );
}
