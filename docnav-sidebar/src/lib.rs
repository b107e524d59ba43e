//! Docnav Sidebar Configuration
//!
//! A standalone library describing the navigation sidebar of the
//! documentation site with support for:
//! - A built-in `tutorialSidebar` definition covering the tutorial doc set
//! - JSON sidebar files (`sidebars.json`) overriding the built-in tree
//! - Structural validation (identifier uniqueness, non-empty labels)
//! - Serialization into the representation the site builder consumes
//!
//! # Architecture
//!
//! This crate is independent of the CLI and can be used in other projects.
//!
//! - [`config`] - Sidebar file resolution and loading
//! - [`types`] - Data structures for sidebars, entries, and categories
//! - [`defaults`] - Built-in sidebar definition
//! - [`parser`] - JSON parsing and validation
//! - [`writer`] - Serialization for the site builder

pub mod config;
pub mod defaults;
pub mod parser;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use types::{flatten, Category, FlatEntry, SidebarEntry, Sidebars};
pub use types::TUTORIAL_SIDEBAR;

/// Errors that can occur during sidebar operations
#[derive(thiserror::Error, Debug)]
pub enum SidebarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sidebar '{0}' contains an empty document id")]
    EmptyDocId(String),

    #[error("duplicate document id '{id}' in sidebar '{sidebar}'")]
    DuplicateDocId { sidebar: String, id: String },

    #[error("sidebar '{0}' contains a category with an empty label")]
    EmptyLabel(String),

    #[error("sidebar validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, SidebarError>;
