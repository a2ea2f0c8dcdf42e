//! `xeplist.xml` parser
//!
//! Deserializes the document with quick-xml's serde support into raw string
//! records, then validates and converts each entry into a typed [`XepInfo`].

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::{Result, XepError};
use crate::model::{LastRevision, Status, XepInfo, XepKey};
use crate::registry::XepRegistry;
use crate::{log_op_end, log_op_error, log_op_start};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct RawXepInfos {
    #[serde(rename = "xep", default)]
    xeps: Vec<RawXep>,
}

#[derive(Debug, Deserialize)]
struct RawXep {
    #[serde(rename = "@accepted")]
    accepted: Option<String>,
    number: Option<String>,
    #[serde(rename = "proto-name")]
    proto_name: Option<String>,
    title: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    #[serde(rename = "type")]
    doc_type: Option<String>,
    status: Option<String>,
    approver: Option<String>,
    shortname: Option<String>,
    sig: Option<String>,
    #[serde(rename = "last-call")]
    last_call: Option<String>,
    #[serde(rename = "last-revision")]
    last_revision: Option<RawRevision>,
}

#[derive(Debug, Deserialize)]
struct RawRevision {
    version: Option<String>,
    date: Option<String>,
    initials: Option<String>,
    remark: Option<String>,
}

/// Read and parse a registry file
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - any error of [`parse_registry_str`]
pub fn load_registry(path: &Path) -> Result<XepRegistry> {
    let start = Instant::now();
    log_op_start!("load_registry", path = %path.display());

    let result = fs::read_to_string(path)
        .map_err(|e| XepError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .and_then(|content| parse_registry_str(&content));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(registry) => log_op_end!(
            "load_registry",
            duration_ms = duration_ms,
            accepted_len = registry.accepted.len(),
            proto_len = registry.protos.len()
        ),
        Err(err) => log_op_error!("load_registry", err.clone(), duration_ms = duration_ms),
    }
    result
}

/// Parse the text of an `xeplist.xml` document
///
/// Entries with `accepted="true"` land in [`XepRegistry::accepted`], the rest
/// in [`XepRegistry::protos`]. A later duplicate entry replaces an earlier one.
///
/// # Errors
///
/// - `InvalidRegistry` if the XML is malformed
/// - `MissingElement` if an entry lacks its key, title or status
/// - `InvalidStatus`, `InvalidNumber`, `InvalidAcceptedFlag`, `InvalidDate`
///   for unparseable values
pub fn parse_registry_str(content: &str) -> Result<XepRegistry> {
    let raw: RawXepInfos = quick_xml::de::from_str(content)?;

    let mut registry = XepRegistry::new();
    for (index, raw_xep) in raw.xeps.into_iter().enumerate() {
        let info = convert_entry(index, raw_xep)?;
        let key = info.key.clone();
        if registry.insert(info).is_some() {
            tracing::warn!(xep = %key, "duplicate registry entry, keeping the later one");
        }
    }
    Ok(registry)
}

fn convert_entry(index: usize, raw: RawXep) -> Result<XepInfo> {
    let entry_label = raw
        .number
        .as_deref()
        .or(raw.proto_name.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", index));

    let accepted = match non_empty(raw.accepted) {
        Some(flag) if flag.eq_ignore_ascii_case("true") => true,
        Some(flag) if flag.eq_ignore_ascii_case("false") => false,
        Some(flag) => return Err(XepError::InvalidAcceptedFlag { value: flag }),
        None => return Err(missing(&entry_label, "accepted attribute")),
    };

    let key = if accepted {
        let number = non_empty(raw.number).ok_or_else(|| missing(&entry_label, "number"))?;
        let parsed = number
            .parse::<u32>()
            .map_err(|_| XepError::InvalidNumber { value: number })?;
        XepKey::Accepted(parsed)
    } else {
        let name =
            non_empty(raw.proto_name).ok_or_else(|| missing(&entry_label, "proto-name"))?;
        XepKey::Proto(name)
    };

    let status: Status = non_empty(raw.status)
        .ok_or_else(|| missing(&entry_label, "status"))?
        .parse()?;

    let last_revision = raw.last_revision.map(convert_revision).transpose()?;

    Ok(XepInfo {
        title: non_empty(raw.title)
            .map(|text| collapse_whitespace(&text))
            .ok_or_else(|| missing(&entry_label, "title"))?,
        abstract_text: raw
            .abstract_text
            .map(|text| collapse_whitespace(&text))
            .unwrap_or_default(),
        doc_type: non_empty(raw.doc_type).unwrap_or_default(),
        status,
        approver: non_empty(raw.approver).unwrap_or_default(),
        shortname: non_empty(raw.shortname),
        sig: non_empty(raw.sig),
        last_call: parse_date("last-call", raw.last_call)?,
        last_revision,
        key,
    })
}

fn convert_revision(raw: RawRevision) -> Result<LastRevision> {
    Ok(LastRevision {
        version: non_empty(raw.version),
        date: parse_date("date", raw.date)?,
        initials: non_empty(raw.initials),
        remark: non_empty(raw.remark).map(|text| collapse_whitespace(&text)),
    })
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>> {
    non_empty(value)
        .map(|value| {
            NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| XepError::InvalidDate {
                field: field.to_string(),
                value,
            })
        })
        .transpose()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn missing(xep: &str, element: &str) -> XepError {
    XepError::MissingElement {
        xep: xep.to_string(),
        element: element.to_string(),
    }
}
