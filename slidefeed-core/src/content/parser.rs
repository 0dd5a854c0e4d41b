// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content parser
//!
//! Decodes the remote payload `{ "data": [ { "type", "title", "content" } ] }`
//! into a [`ContentSequence`]. A malformed element is skipped and reported;
//! only a malformed envelope fails the whole decode.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{ContentItem, ContentKind, ContentSequence};
use crate::events::{ContentEvent, EventDispatcher};

/// Result of a successful envelope decode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Well-formed items, in payload order
    pub content: ContentSequence,
    /// Elements that were dropped, in payload order
    pub skipped: Vec<SkippedItem>,
}

/// An array element that was dropped from the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    /// Position in the `data` array
    pub index: usize,
    /// Why it was dropped
    pub reason: SkipReason,
}

/// Why one element of `data` was skipped
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The element is a number, string, array, or null
    #[error("element is not an object")]
    NotAnObject,

    /// A required field is absent
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A required field is present but not a string (including `null`)
    #[error("field `{0}` is not a string")]
    NotAString(&'static str),
}

/// The payload envelope itself is unusable
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// Not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Top-level value is not an object
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// No `data` field
    #[error("payload has no `data` field")]
    MissingData,

    /// `data` is present but not an array
    #[error("`data` is not an array")]
    DataNotArray,
}

/// Decode a payload into items plus skip records, or a structural failure
pub fn decode(raw: &str) -> Result<Decoded, StructuralError> {
    let root: Value =
        serde_json::from_str(raw).map_err(|e| StructuralError::InvalidJson(e.to_string()))?;
    let envelope = root.as_object().ok_or(StructuralError::NotAnObject)?;
    let entries = envelope
        .get("data")
        .ok_or(StructuralError::MissingData)?
        .as_array()
        .ok_or(StructuralError::DataNotArray)?;

    let mut items = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match decode_entry(entry) {
            Ok(item) => items.push(item),
            Err(reason) => skipped.push(SkippedItem { index, reason }),
        }
    }

    Ok(Decoded {
        content: ContentSequence::new(items),
        skipped,
    })
}

/// Decode a payload, reporting every problem to `events`.
///
/// Never fails: a structural failure yields an empty sequence.
pub fn parse(raw: &str, events: &EventDispatcher) -> ContentSequence {
    match decode(raw) {
        Ok(decoded) => {
            report_skipped(&decoded.skipped, events);
            decoded.content
        }
        Err(error) => {
            report_structural(&error, events);
            ContentSequence::default()
        }
    }
}

pub(crate) fn report_skipped(skipped: &[SkippedItem], events: &EventDispatcher) {
    for item in skipped {
        debug!(index = item.index, reason = %item.reason, "skipping content element");
        events.dispatch(ContentEvent::ItemSkipped {
            index: item.index,
            reason: item.reason.clone(),
        });
    }
}

pub(crate) fn report_structural(error: &StructuralError, events: &EventDispatcher) {
    warn!(error = %error, "content payload rejected");
    events.dispatch(ContentEvent::StructuralParseFailure {
        error: error.clone(),
    });
}

fn decode_entry(entry: &Value) -> Result<ContentItem, SkipReason> {
    let fields = entry.as_object().ok_or(SkipReason::NotAnObject)?;
    let tag = required_str(fields, "type")?;
    let title = required_str(fields, "title")?;
    let body = required_str(fields, "content")?;

    Ok(ContentItem::new(ContentKind::from_tag(tag), title, body))
}

fn required_str<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, SkipReason> {
    match fields.get(name) {
        None => Err(SkipReason::MissingField(name)),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(SkipReason::NotAString(name)),
    }
}
