//! Sidebar data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the sidebar rendered for the tutorial doc set
pub const TUTORIAL_SIDEBAR: &str = "tutorialSidebar";

/// A single sidebar entry
///
/// On the wire an entry is either a bare string (a document reference) or
/// an object carrying a `"type": "category"` discriminant together with a
/// label and nested items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Document identifier, resolved against the content collection by the
    /// site builder
    Doc(String),

    /// Labeled grouping of further entries
    Category(Category),
}

impl SidebarEntry {
    /// Create a leaf entry referencing a document
    pub fn doc(id: impl Into<String>) -> Self {
        SidebarEntry::Doc(id.into())
    }

    /// Create a category entry with the given label and children
    pub fn category(label: impl Into<String>, items: Vec<SidebarEntry>) -> Self {
        SidebarEntry::Category(Category::new(label, items))
    }
}

/// A labeled category grouping an ordered list of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Wire discriminant, always `"category"`
    #[serde(rename = "type")]
    pub kind: CategoryKind,

    /// Display label shown as the group header
    pub label: String,

    /// Ordered child entries; order defines render order
    #[serde(default)]
    pub items: Vec<SidebarEntry>,
}

impl Category {
    pub fn new(label: impl Into<String>, items: Vec<SidebarEntry>) -> Self {
        Self {
            kind: CategoryKind::Category,
            label: label.into(),
            items,
        }
    }
}

/// Discriminant tag for category entries
///
/// Modeled as a closed enum so that an object with an unknown `type` value
/// fails deserialization instead of being accepted as a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    #[default]
    #[serde(rename = "category")]
    Category,
}

/// All sidebars keyed by name, as consumed by the site builder
///
/// Keys are ordered deterministically; the meaningful ordering is the entry
/// order inside each sidebar, which the inner `Vec`s preserve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebars(pub BTreeMap<String, Vec<SidebarEntry>>);

impl Sidebars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry list of a sidebar by name
    pub fn get(&self, name: &str) -> Option<&[SidebarEntry]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Insert a sidebar, replacing any previous definition under that name
    pub fn insert(&mut self, name: impl Into<String>, entries: Vec<SidebarEntry>) {
        self.0.insert(name.into(), entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<SidebarEntry>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every document id across all sidebars, in traversal order
    pub fn doc_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for entries in self.0.values() {
            collect_doc_ids(entries, &mut ids);
        }
        ids
    }
}

fn collect_doc_ids<'a>(entries: &'a [SidebarEntry], ids: &mut Vec<&'a str>) {
    for entry in entries {
        match entry {
            SidebarEntry::Doc(id) => ids.push(id),
            SidebarEntry::Category(cat) => collect_doc_ids(&cat.items, ids),
        }
    }
}

/// One item of a flattened sidebar, produced by [`flatten`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatEntry<'a> {
    /// Document reference at the given nesting depth
    Doc { id: &'a str, depth: usize },

    /// Category header; its children follow at `depth + 1`
    Category { label: &'a str, depth: usize },
}

/// Depth-first, order-preserving walk of an entry list
///
/// A category header appears before its children, matching the order the
/// site builder renders the sidebar in.
pub fn flatten(entries: &[SidebarEntry]) -> Vec<FlatEntry<'_>> {
    let mut out = Vec::new();
    flatten_into(entries, 0, &mut out);
    out
}

fn flatten_into<'a>(entries: &'a [SidebarEntry], depth: usize, out: &mut Vec<FlatEntry<'a>>) {
    for entry in entries {
        match entry {
            SidebarEntry::Doc(id) => out.push(FlatEntry::Doc { id, depth }),
            SidebarEntry::Category(cat) => {
                out.push(FlatEntry::Category {
                    label: &cat.label,
                    depth,
                });
                flatten_into(&cat.items, depth + 1, out);
            }
        }
    }
}
