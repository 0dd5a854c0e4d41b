// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content type definitions
//!
//! These types represent the decoded content blocks shown by render layers.

use serde::{Deserialize, Serialize};

/// Kind of a content block, taken from the payload `type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A slide (`"slide"`)
    Slide,
    /// A story (`"story"`)
    Story,
    /// Any other tag; kept for forward compatibility, never rendered
    Unknown,
}

impl ContentKind {
    /// Map a payload `type` tag to a kind.
    ///
    /// Matching is case-sensitive: `"Slide"` is `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "slide" => ContentKind::Slide,
            "story" => ContentKind::Story,
            _ => ContentKind::Unknown,
        }
    }

    /// Whether render layers should show blocks of this kind
    pub fn is_renderable(&self) -> bool {
        !matches!(self, ContentKind::Unknown)
    }

    /// Display label for this kind
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Slide => "slide",
            ContentKind::Story => "story",
            ContentKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One titled block of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    kind: ContentKind,
    title: String,
    body: String,
}

impl ContentItem {
    /// Create a content item
    pub fn new(kind: ContentKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Kind taken from the `type` tag
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Heading text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text (the payload `content` field)
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Ordered content blocks, in payload array order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentSequence {
    items: Vec<ContentItem>,
}

impl ContentSequence {
    /// Create a sequence from items, keeping their order
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// Number of items, including `Unknown` ones
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the sequence has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate all items in order
    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    /// All items as a slice
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items a render layer should draw (everything but `Unknown`)
    pub fn renderable(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(|item| item.kind.is_renderable())
    }

    /// Take ownership of the items
    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }
}

impl FromIterator<ContentItem> for ContentSequence {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ContentSequence {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
