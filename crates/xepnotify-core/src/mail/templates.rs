//! Fixed announcement texts.
//!
//! Bodies are returned unwrapped; [`compose`](super::compose) wraps them.

/// Appended to routine status mails; the XEP list is regenerated by a
/// separate job and may lag behind the documents.
pub const STALE_NOTE: &str = "\n\nNote: The information in the XEP list at \
https://xmpp.org/extensions/ is updated by a separate automated process and \
may be stale at the time this email is sent. The XEP documents linked herein \
are up-to-date.";

/// Placeholder changelog when the last revision has no remark or initials
pub const NO_CHANGELOG: &str = "(see in-document revision history)";

pub fn proto_subject(title: &str) -> String {
    format!("Proposed XMPP Extension: {title}")
}

pub fn status_subject(action_label: &str, xep_label: &str, title: &str) -> String {
    format!("{action_label}: {xep_label} ({title})")
}

pub fn proto_body(title: &str, abstract_text: &str, url: &str, approver: &str) -> String {
    format!(
        "The XMPP Extensions Editor has received a proposal for a new XEP.\n\
         \n\
         Title: {title}\n\
         Abstract:\n\
         {abstract_text}\n\
         \n\
         URL: {url}\n\
         \n\
         The {approver} will decide in the next two weeks whether to accept this \
         proposal as an official XEP."
    )
}

pub fn last_call_body(
    xep_label: &str,
    title: &str,
    abstract_text: &str,
    url: &str,
    end_date: &str,
) -> String {
    format!(
        "This message constitutes notice of a Last Call for comments on {xep_label}.\n\
         \n\
         Title: {title}\n\
         Abstract:\n\
         {abstract_text}\n\
         \n\
         URL: {url}\n\
         \n\
         This Last Call begins today and shall end at the close of business on \
         {end_date}.\n\
         \n\
         Please consider the following questions during this Last Call and send your \
         feedback to the standards@xmpp.org discussion list:\n\
         \n\
         1. Is this specification needed to fill gaps in the XMPP protocol stack or to \
         clarify an existing protocol?\n\
         \n\
         2. Does the specification solve the problem stated in the introduction and \
         requirements?\n\
         \n\
         3. Do you plan to implement this specification in your code? If not, why not?\n\
         \n\
         4. Do you have any security concerns related to this specification?\n\
         \n\
         5. Is the specification accurate and clearly written?\n\
         \n\
         Your feedback is appreciated!\n"
    )
}

pub fn release_body(
    version: Option<&str>,
    xep_label: &str,
    title: &str,
    abstract_text: &str,
    changelog: &str,
    url: &str,
) -> String {
    let headline = match version {
        Some(version) => format!("Version {version} of {xep_label} ({title}) has been released."),
        None => format!("A new version of {xep_label} ({title}) has been released."),
    };
    format!(
        "{headline}\n\
         \n\
         Abstract:\n\
         {abstract_text}\n\
         \n\
         Changelog:\n\
         {changelog}\n\
         \n\
         URL: {url}{STALE_NOTE}"
    )
}

pub fn defer_body(xep_label: &str, title: &str, abstract_text: &str, url: &str) -> String {
    format!(
        "{xep_label} ({title}) has been Deferred because of inactivity.\n\
         \n\
         Abstract:\n\
         {abstract_text}\n\
         \n\
         URL: {url}\n\
         \n\
         If and when a new revision of this XEP is published, its status will be \
         changed back to Experimental.{STALE_NOTE}"
    )
}
