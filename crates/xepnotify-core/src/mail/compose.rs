use crate::mail::notification::{Notification, NotificationMetadata};
use crate::mail::templates;
use crate::mail::wrap::wrap_text;
use crate::model::{Action, XepInfo, XepKey};

pub const XEP_URL_PREFIX: &str = "https://xmpp.org/extensions/";

/// Shown when a Last Call notice has no end date on record
const UNKNOWN_LAST_CALL_END: &str = "a date yet to be announced";

/// Public URL of a XEP or of a ProtoXEP in the inbox
pub fn xep_url(key: &XepKey) -> String {
    match key {
        XepKey::Accepted(number) => format!("{}xep-{:04}.html", XEP_URL_PREFIX, number),
        XepKey::Proto(name) => format!("{}inbox/{}.html", XEP_URL_PREFIX, name),
    }
}

/// Changelog line built from the last revision's remark and initials
pub fn changelog(info: &XepInfo) -> String {
    info.last_revision
        .as_ref()
        .and_then(|rev| match (&rev.remark, &rev.initials) {
            (Some(remark), Some(initials)) => Some(format!("{} ({})", remark, initials)),
            _ => None,
        })
        .unwrap_or_else(|| templates::NO_CHANGELOG.to_string())
}

/// Build the announcement for `action` on the new-snapshot record `info`
pub fn compose(action: Action, info: &XepInfo) -> Notification {
    let url = xep_url(&info.key);
    let xep_label = info.key.label();

    let (subject, body, approver) = match action {
        Action::Proto => (
            templates::proto_subject(&info.title),
            templates::proto_body(&info.title, &info.abstract_text, &url, &info.approver),
            Some(info.approver.clone()),
        ),
        Action::LastCall => {
            let end_date = info
                .last_call
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| UNKNOWN_LAST_CALL_END.to_string());
            (
                status_subject(action, &xep_label, info),
                templates::last_call_body(
                    &xep_label,
                    &info.title,
                    &info.abstract_text,
                    &url,
                    &end_date,
                ),
                None,
            )
        }
        Action::Defer => (
            status_subject(action, &xep_label, info),
            templates::defer_body(&xep_label, &info.title, &info.abstract_text, &url),
            None,
        ),
        Action::New
        | Action::Draft
        | Action::Stable
        | Action::Active
        | Action::Final
        | Action::Retract
        | Action::Obsolete
        | Action::Update
        | Action::Deprecate
        | Action::Reject => (
            status_subject(action, &xep_label, info),
            templates::release_body(
                info.version(),
                &xep_label,
                &info.title,
                &info.abstract_text,
                &changelog(info),
                &url,
            ),
            None,
        ),
    };

    Notification {
        subject,
        metadata: NotificationMetadata {
            action,
            title: info.title.clone(),
            doc_type: info.doc_type.clone(),
            status: info.status,
            number: info.key.number(),
            url,
            approver,
        },
        body: wrap_text(&body),
    }
}

fn status_subject(action: Action, xep_label: &str, info: &XepInfo) -> String {
    templates::status_subject(action.label(), xep_label, &info.title)
}
