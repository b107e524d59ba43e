//! Sidebar serialization for the site builder

use crate::types::Sidebars;
use crate::Result;
use std::path::Path;

/// Serialize sidebars to pretty-printed JSON
pub fn to_json(sidebars: &Sidebars) -> Result<String> {
    let mut json = serde_json::to_string_pretty(sidebars)?;
    json.push('\n');
    Ok(json)
}

/// Save sidebars to a file in the representation the site builder consumes
pub fn save_to_file(sidebars: &Sidebars, path: &Path) -> Result<()> {
    let json = to_json(sidebars)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, json)?;
    Ok(())
}
