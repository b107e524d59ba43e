//! Sidebar file resolution and loading

use crate::defaults;
use crate::types::Sidebars;
use crate::{parser, Result};
use std::path::{Path, PathBuf};

/// File name the site builder looks for in a docs project directory
pub const SIDEBARS_FILE: &str = "sidebars.json";

/// Path of the sidebar file inside a docs project directory
pub fn sidebars_file(dir: &Path) -> PathBuf {
    dir.join(SIDEBARS_FILE)
}

/// Load sidebars from `sidebars.json` in the given directory, or return the
/// built-in definition if the file does not exist
///
/// A file that exists but fails to parse or validate is an error: the
/// consumer is a batch site build, and silently substituting the built-in
/// tree would mask a broken override.
pub fn load_or_default(dir: &Path) -> Result<Sidebars> {
    let path = sidebars_file(dir);

    match std::fs::read_to_string(&path) {
        Ok(content) => parser::parse_json(&content),
        Err(_) => Ok(defaults::default_sidebars()),
    }
}

impl Sidebars {
    /// Load from a directory's `sidebars.json`, or return the built-in tree
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        load_or_default(dir)
    }

    /// Load from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        parser::load_from_file(path)
    }
}
