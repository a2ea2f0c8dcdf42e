use chrono::NaiveDate;
use xepnotify_core::{LastRevision, Status, XepInfo, XepKey};

/// Accepted XEP fixture with a version and a full last revision
#[allow(dead_code)]
pub fn accepted(number: u32, status: Status, version: &str) -> XepInfo {
    XepInfo {
        key: XepKey::Accepted(number),
        title: format!("Test Extension {}", number),
        abstract_text: "This specification defines a test extension.".to_string(),
        doc_type: "Standards Track".to_string(),
        status,
        approver: "Council".to_string(),
        shortname: Some(format!("test{}", number)),
        sig: Some("Standards".to_string()),
        last_call: None,
        last_revision: Some(LastRevision {
            version: Some(version.to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            initials: Some("jdoe".to_string()),
            remark: Some("Clarify wording.".to_string()),
        }),
    }
}

/// ProtoXEP fixture
#[allow(dead_code)]
pub fn proto(name: &str) -> XepInfo {
    XepInfo {
        key: XepKey::Proto(name.to_string()),
        title: format!("Proto {}", name),
        abstract_text: "A proposed extension.".to_string(),
        doc_type: "Standards Track".to_string(),
        status: Status::Proto,
        approver: "Council".to_string(),
        shortname: None,
        sig: None,
        last_call: None,
        last_revision: Some(LastRevision {
            version: Some("0.0.1".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 4, 2),
            initials: Some("jdoe".to_string()),
            remark: Some("First draft.".to_string()),
        }),
    }
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Small but realistic `xeplist.xml` document
#[allow(dead_code)]
pub const SAMPLE_XEPLIST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<xep-infos>
  <xep accepted="true">
    <number>1</number>
    <title>XMPP Extension Protocols</title>
    <abstract>This document defines the standards process followed by the
      XMPP Standards Foundation.</abstract>
    <type>Procedural</type>
    <status>Active</status>
    <approver>Board</approver>
    <shortname>N/A</shortname>
    <last-revision>
      <date>2016-11-16</date>
      <version>1.23.1</version>
      <initials>ssw</initials>
      <remark>Fix typo &amp; spacing.</remark>
    </last-revision>
  </xep>
  <xep accepted="true">
    <number>0459</number>
    <title>XMPP Compliance Suites 2022</title>
    <abstract>This document defines XMPP protocol compliance levels.</abstract>
    <type>Standards Track</type>
    <status>Proposed</status>
    <approver>Council</approver>
    <sig>Standards</sig>
    <last-call>2024-01-30</last-call>
    <last-revision>
      <date>2023-12-01</date>
      <version>0.2.0</version>
    </last-revision>
  </xep>
  <xep accepted="false">
    <proto-name>mix-misc</proto-name>
    <title>MIX: Miscellaneous Capabilities</title>
    <abstract>Extra MIX features.</abstract>
    <type>Standards Track</type>
    <status>ProtoXEP</status>
    <approver>Council</approver>
    <unknown-element>ignored</unknown-element>
  </xep>
</xep-infos>
"#;
