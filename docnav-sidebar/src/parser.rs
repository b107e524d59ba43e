//! JSON sidebar parsing and validation

use crate::types::{SidebarEntry, Sidebars};
use crate::{Result, SidebarError};
use std::collections::HashSet;
use std::path::Path;

/// Parse sidebars from a JSON string
pub fn parse_json(content: &str) -> Result<Sidebars> {
    let sidebars: Sidebars = serde_json::from_str(content).map_err(SidebarError::Json)?;
    validate_sidebars(&sidebars)?;
    Ok(sidebars)
}

/// Load sidebars from a JSON file
pub fn load_from_file(path: &Path) -> Result<Sidebars> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

/// Validate sidebars for consistency
///
/// Checks the structural rules the site builder relies on: non-empty
/// sidebar names and entry lists, non-empty document ids and category
/// labels, and document-id uniqueness within each sidebar's tree. Whether
/// an id resolves to an actual document is the site builder's concern.
pub fn validate_sidebars(sidebars: &Sidebars) -> Result<()> {
    if sidebars.is_empty() {
        return Err(SidebarError::Validation("no sidebars defined".to_string()));
    }

    for (name, entries) in sidebars.iter() {
        if name.is_empty() {
            return Err(SidebarError::Validation(
                "sidebar with empty name".to_string(),
            ));
        }
        if entries.is_empty() {
            return Err(SidebarError::Validation(format!(
                "sidebar '{}' has no entries",
                name
            )));
        }

        let mut seen = HashSet::new();
        validate_entries(name, entries, &mut seen)?;
    }

    Ok(())
}

/// Validate one sidebar's entry tree
fn validate_entries<'a>(
    sidebar: &str,
    entries: &'a [SidebarEntry],
    seen: &mut HashSet<&'a str>,
) -> Result<()> {
    for entry in entries {
        match entry {
            SidebarEntry::Doc(id) => {
                if id.is_empty() {
                    return Err(SidebarError::EmptyDocId(sidebar.to_string()));
                }
                if !seen.insert(id.as_str()) {
                    return Err(SidebarError::DuplicateDocId {
                        sidebar: sidebar.to_string(),
                        id: id.clone(),
                    });
                }
            }
            SidebarEntry::Category(cat) => {
                if cat.label.is_empty() {
                    return Err(SidebarError::EmptyLabel(sidebar.to_string()));
                }
                validate_entries(sidebar, &cat.items, seen)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_sidebars() {
        let json = r#"{
            "tutorialSidebar": [
                "intro",
                {"type": "category", "label": "Guides", "items": ["guides/start"]}
            ]
        }"#;
        let sidebars = parse_json(json).unwrap();
        assert_eq!(sidebars.len(), 1);
        assert_eq!(sidebars.doc_ids(), vec!["intro", "guides/start"]);
    }

    #[test]
    fn test_reject_empty_doc_id() {
        let json = r#"{"tutorialSidebar": ["intro", ""]}"#;
        let err = parse_json(json).unwrap_err();
        assert!(matches!(err, SidebarError::EmptyDocId(_)));
    }

    #[test]
    fn test_reject_duplicate_doc_id() {
        let json = r#"{
            "tutorialSidebar": [
                "intro",
                {"type": "category", "label": "Guides", "items": ["intro"]}
            ]
        }"#;
        let err = parse_json(json).unwrap_err();
        match err {
            SidebarError::DuplicateDocId { sidebar, id } => {
                assert_eq!(sidebar, "tutorialSidebar");
                assert_eq!(id, "intro");
            }
            other => panic!("expected duplicate id error, got {}", other),
        }
    }

    #[test]
    fn test_reject_empty_category_label() {
        let json = r#"{"tutorialSidebar": [{"type": "category", "label": "", "items": []}]}"#;
        let err = parse_json(json).unwrap_err();
        assert!(matches!(err, SidebarError::EmptyLabel(_)));
    }

    #[test]
    fn test_reject_empty_sidebar() {
        let json = r#"{"tutorialSidebar": []}"#;
        assert!(parse_json(json).is_err());
    }

    #[test]
    fn test_reject_no_sidebars() {
        assert!(parse_json("{}").is_err());
    }

    #[test]
    fn test_reject_malformed_category() {
        let json = r#"{"tutorialSidebar": [{"label": "Guides", "items": []}]}"#;
        assert!(parse_json(json).is_err());
    }

    #[test]
    fn test_same_doc_allowed_in_different_sidebars() {
        let json = r#"{
            "tutorialSidebar": ["intro"],
            "referenceSidebar": ["intro"]
        }"#;
        assert!(parse_json(json).is_ok());
    }

    #[test]
    fn test_default_sidebars_validate() {
        validate_sidebars(&crate::defaults::default_sidebars()).unwrap();
    }
}
