//! Character import, export and editing.

use storyboard_core::{CharacterDraft, SequentialIssuer, default_characters};
use storyboard_editor::{
    CharacterPatch, add_character, edit_character, export_characters, import_characters,
    remove_character,
};
use storyboard_error::EditorErrorKind;

const IMPORT: &str = r#"{
    "characters": [
        {"name": "Bo", "description": "A sleepy bear", "features": "brown fur, red beanie"},
        {"id": "kit", "name": "Kit", "description": "A kitten", "features": "white fur, one black ear", "personality": "nosy"}
    ]
}"#;

#[test]
fn test_import_appends() -> anyhow::Result<()> {
    let existing = default_characters();
    let issuer = SequentialIssuer::new("c");

    let merged = import_characters(&existing, IMPORT, &issuer)?;

    assert_eq!(merged.len(), existing.len() + 2);
    assert_eq!(&merged[..existing.len()], existing.as_slice());
    assert_eq!(merged[2].name, "Bo");
    assert_eq!(merged[2].id, "c-1");
    assert_eq!(merged[3].id, "kit");
    assert_eq!(merged[3].personality.as_deref(), Some("nosy"));
    Ok(())
}

#[test]
fn test_import_reissues_colliding_ids() -> anyhow::Result<()> {
    let text = r#"{"characters": [
        {"id": "default-1", "name": "Clash", "description": "d", "features": "f"},
        {"id": "twin", "name": "Twin A", "description": "d", "features": "f"},
        {"id": "twin", "name": "Twin B", "description": "d", "features": "f"}
    ]}"#;

    let merged = import_characters(&default_characters(), text, &SequentialIssuer::new("c"))?;

    let ids: Vec<&str> = merged.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["default-1", "default-2", "c-1", "twin", "c-2"]);
    Ok(())
}

#[test]
fn test_import_malformed_text_is_parse_error() {
    let existing = default_characters();

    let err =
        import_characters(&existing, "{ characters: [", &SequentialIssuer::new("c")).unwrap_err();

    assert!(matches!(err.editor_kind(), Some(EditorErrorKind::Parse(_))));
    assert_eq!(existing, default_characters());
}

#[test]
fn test_import_wrong_shape_is_schema_error() {
    let cases = [
        r#"{"people": []}"#,
        r#"{"characters": {"name": "Bo"}}"#,
        r#"{"characters": [{"name": "Bo", "description": "A bear"}]}"#,
        r#"[{"name": "Bo", "description": "A bear", "features": "fur"}]"#,
    ];

    for text in cases {
        let err = import_characters(&[], text, &SequentialIssuer::new("c")).unwrap_err();
        assert!(
            matches!(err.editor_kind(), Some(EditorErrorKind::Schema(_))),
            "{} gave {}",
            text,
            err
        );
    }
}

#[test]
fn test_export_reimports_cleanly() -> anyhow::Result<()> {
    let characters = default_characters();

    let text = export_characters(&characters)?;
    let reimported = import_characters(&[], &text, &SequentialIssuer::new("c"))?;

    assert!(text.contains("\"characters\""));
    assert_eq!(reimported, characters);
    Ok(())
}

#[test]
fn test_add_edit_remove() -> anyhow::Result<()> {
    let issuer = SequentialIssuer::new("c");
    let draft = CharacterDraft::builder()
        .name("Pip")
        .description("A tiny mouse")
        .features("grey mouse, yellow raincoat")
        .build()?;

    let added = add_character(&default_characters(), draft, &issuer);
    assert_eq!(added.len(), 3);
    assert_eq!(added[2].id, "c-1");

    let patch = CharacterPatch::builder().features("grey mouse, green raincoat").build()?;
    let edited = edit_character(&added, "c-1", &patch);
    assert_eq!(edited[2].features, "grey mouse, green raincoat");
    assert_eq!(edited[2].name, "Pip");

    let removed = remove_character(&edited, "default-1");
    let ids: Vec<&str> = removed.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["default-2", "c-1"]);
    Ok(())
}

#[test]
fn test_absent_ids_are_noops() -> anyhow::Result<()> {
    let characters = default_characters();
    let patch = CharacterPatch::builder().name("Nobody").build()?;

    assert_eq!(remove_character(&characters, "missing"), characters);
    assert_eq!(edit_character(&characters, "missing", &patch), characters);
    assert!(CharacterPatch::default().is_empty());
    Ok(())
}
