//! Integration tests for the emit pipeline
//!
//! The `docnav emit` output must parse back into the same ordered tree the
//! site builder receives, so these tests drive the library the way the CLI
//! does: build or load a definition, serialize it, and read it back.

use docnav_sidebar::{config, defaults, parser, writer, SidebarEntry, Sidebars, TUTORIAL_SIDEBAR};

#[test]
fn emitted_defaults_round_trip() {
    let sidebars = defaults::default_sidebars();
    let json = writer::to_json(&sidebars).unwrap();
    let parsed = parser::parse_json(&json).unwrap();
    assert_eq!(parsed, sidebars);
}

#[test]
fn emitted_defaults_keep_entry_order() {
    let sidebars = defaults::default_sidebars();
    let json = writer::to_json(&sidebars).unwrap();
    let parsed = parser::parse_json(&json).unwrap();
    assert_eq!(parsed.doc_ids(), sidebars.doc_ids());
}

#[test]
fn emitted_json_is_the_builder_representation() {
    let sidebars = defaults::default_sidebars();
    let json = writer::to_json(&sidebars).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entries = value[TUTORIAL_SIDEBAR].as_array().unwrap();
    assert_eq!(entries[0], "intro");

    let advanced = entries
        .iter()
        .find(|e| e["label"] == "Advanced Features")
        .unwrap();
    assert_eq!(advanced["type"], "category");
    assert_eq!(advanced["items"][0], "advanced/syntax-highlighting");
}

#[test]
fn override_file_replaces_builtin_tree() {
    let dir = std::env::temp_dir().join("docnav-emit-test-override");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let mut sidebars = Sidebars::new();
    sidebars.insert(
        TUTORIAL_SIDEBAR,
        vec![
            SidebarEntry::doc("intro"),
            SidebarEntry::category("Guides", vec![SidebarEntry::doc("guides/start")]),
        ],
    );
    writer::save_to_file(&sidebars, &config::sidebars_file(&dir)).unwrap();

    let loaded = Sidebars::load_or_default(&dir).unwrap();
    assert_eq!(loaded, sidebars);
    assert_eq!(loaded.doc_ids(), vec!["intro", "guides/start"]);

    let _ = std::fs::remove_dir_all(&dir);
}
