//! CLI integration tests
//!
//! Run the built binary against registry files in a temp directory. Child
//! processes get no terminal, so confirmation and interactive configuration
//! are never available.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const OLD_XEPLIST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<xep-infos>
  <xep accepted="true">
    <number>45</number>
    <title>Multi-User Chat</title>
    <abstract>This specification defines an XMPP protocol extension for
      multi-user text chat.</abstract>
    <type>Standards Track</type>
    <status>Draft</status>
    <approver>Council</approver>
    <last-revision>
      <date>2023-01-10</date>
      <version>1.34.5</version>
      <initials>gk</initials>
      <remark>Clarify nickname handling.</remark>
    </last-revision>
  </xep>
</xep-infos>
"#;

const NEW_XEPLIST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<xep-infos>
  <xep accepted="true">
    <number>45</number>
    <title>Multi-User Chat</title>
    <abstract>This specification defines an XMPP protocol extension for
      multi-user text chat.</abstract>
    <type>Standards Track</type>
    <status>Draft</status>
    <approver>Council</approver>
    <last-revision>
      <date>2024-02-01</date>
      <version>1.34.6</version>
      <initials>gk</initials>
      <remark>Fix example.</remark>
    </last-revision>
  </xep>
  <xep accepted="true">
    <number>500</number>
    <title>Example Extension</title>
    <abstract>An example.</abstract>
    <type>Standards Track</type>
    <status>Experimental</status>
    <approver>Council</approver>
    <last-revision>
      <date>2024-02-02</date>
      <version>0.1.0</version>
      <initials>ed</initials>
      <remark>Accepted by vote of Council.</remark>
    </last-revision>
  </xep>
  <xep accepted="false">
    <proto-name>mix-misc</proto-name>
    <title>MIX: Miscellaneous Capabilities</title>
    <abstract>Extra MIX features.</abstract>
    <type>Standards Track</type>
    <status>ProtoXEP</status>
    <approver>Council</approver>
  </xep>
</xep-infos>
"#;

const SMTP_ENV: [&str; 5] = [
    "XEPNOTIFY_SMTP__HOST",
    "XEPNOTIFY_SMTP__PORT",
    "XEPNOTIFY_SMTP__USER",
    "XEPNOTIFY_SMTP__PASSWORD",
    "XEPNOTIFY_SMTP__FROM",
];

fn setup(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    let old = temp_dir.path().join("old.xml");
    let new = temp_dir.path().join("new.xml");
    fs::write(&old, OLD_XEPLIST).unwrap();
    fs::write(&new, NEW_XEPLIST).unwrap();
    (old, new)
}

fn xepnotify(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xepnotify"));
    for var in SMTP_ENV {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.args(args).output().expect("Failed to execute CLI")
}

fn path(p: &PathBuf) -> &str {
    p.to_str().unwrap()
}

#[test]
fn test_confirmation_without_terminal_exits_2() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = setup(&temp_dir);

    let output = xepnotify(&[path(&old), path(&new), "standards@example.org"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a TTY"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_smtp_config_exits_3() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = setup(&temp_dir);

    let output = xepnotify(&["-y", path(&old), path(&new), "standards@example.org"]);

    assert_eq!(
        output.status.code(),
        Some(3),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing configuration"));
}

#[test]
fn test_dry_run_prints_every_notification() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = setup(&temp_dir);

    let output = xepnotify(&["-n", path(&old), path(&new), "standards@example.org"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Subject: UPDATED: XEP-0045 (Multi-User Chat)"));
    assert!(stdout.contains("Subject: NEW: XEP-0500 (Example Extension)"));
    assert!(stdout.contains("Subject: Proposed XMPP Extension: MIX: Miscellaneous Capabilities"));
    assert!(stdout.contains("XSF-XEP-Action: PROTO"));
    assert!(stdout.contains("To: standards@example.org"));
    assert!(!stdout.contains("From:"));

    let updated = stdout.find("XEP-0045").unwrap();
    let added = stdout.find("XEP-0500").unwrap();
    let proto = stdout.find("XSF-XEP-Action: PROTO").unwrap();
    assert!(updated < added && added < proto);
}

#[test]
fn test_dry_run_uses_configured_sender() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = setup(&temp_dir);
    let config = temp_dir.path().join("smtp.ini");
    fs::write(&config, "[smtp]\nfrom=editor@example.org\n").unwrap();

    let output = xepnotify(&[
        "-n",
        "-c",
        path(&config),
        path(&old),
        path(&new),
        "standards@example.org",
    ]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("From: editor@example.org"));
}

#[test]
fn test_dry_run_filters() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = setup(&temp_dir);

    let output = xepnotify(&[
        "-n",
        "--no-proto",
        "--no-editorial",
        path(&old),
        path(&new),
        "standards@example.org",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("XEP-0045"), "1.34.5 -> 1.34.6 is editorial");
    assert!(!stdout.contains("PROTO"));
    assert!(stdout.contains("Subject: NEW: XEP-0500 (Example Extension)"));
}

#[test]
fn test_invalid_registry_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    let (old, _) = setup(&temp_dir);
    let broken = temp_dir.path().join("broken.xml");
    fs::write(&broken, "<xep-infos><xep accepted=\"true\">").unwrap();

    let output = xepnotify(&["-n", path(&old), path(&broken), "standards@example.org"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
