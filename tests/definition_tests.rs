mod common;

use chordforge::definition::LayoutDefinition;
use chordforge::geometry::Finger;
use chordforge::layout::Key;
use chordforge::ChordError;
use common::tenkey;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_layout_survives_file_round_trip() {
    let layout = tenkey();
    let dir = tempdir().unwrap();
    let path = dir.path().join("tenkey.json");

    let def = LayoutDefinition::from_layout(&layout);
    assert_eq!(def.meta.name, "tenkey");
    assert_eq!(def.layers.len(), 4);
    def.save_to_file(&path).unwrap();

    let loaded = LayoutDefinition::load_from_file(&path).unwrap();
    assert_eq!(loaded, def);

    let rebuilt = loaded.into_layout().unwrap();
    assert_eq!(rebuilt.keyboard(), layout.keyboard());
    for layer in 0..4 {
        for key in 0..10 {
            let cell = Key::new(layer, key);
            assert_eq!(rebuilt.symbols(cell), layout.symbols(cell));
        }
    }
    for from in 0..4 {
        for to in 0..4 {
            assert_eq!(rebuilt.layer_paths(from, to), layout.layer_paths(from, to));
        }
    }
}

#[test]
fn test_handwritten_definition() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pair.json");
    fs::write(
        &path,
        r#"{
            "meta": { "name": "pair", "author": "someone" },
            "keys": [
                { "hand": "left", "finger": "annular", "row": "middle", "column": "left" },
                { "hand": "right", "finger": "index", "row": "middle", "column": "right", "x": 3.0 }
            ],
            "layers": [["a", "①"], ["A", "⓪"]]
        }"#,
    )
    .unwrap();

    let def = LayoutDefinition::load_from_file(&path).unwrap();
    assert_eq!(def.meta.author, "someone");
    assert_eq!(def.meta.version, "");
    assert_eq!(def.keys[0].finger, Finger::Ring);

    let layout = def.into_layout().unwrap();
    assert_eq!(layout.keyboard().name(), "pair");
    assert_eq!(layout.layer_paths(0, 1), &[vec![1]]);
    assert_eq!(layout.keys_for('A'), &[Key::new(1, 0)]);
}

#[test]
fn test_short_rows_leave_cells_empty() {
    let mut def = LayoutDefinition::from_layout(&tenkey());
    def.layers = vec![vec!["x".to_string()]];
    let layout = def.into_layout().unwrap();
    assert_eq!(layout.symbols(Key::new(0, 0)), "x");
    assert_eq!(layout.symbols(Key::new(0, 5)), "");
    assert_eq!(layout.layer_count(), 1);
}

#[test]
fn test_row_longer_than_keyboard_is_rejected() {
    let mut def = LayoutDefinition::from_layout(&tenkey());
    def.layers[0].push("extra".to_string());
    assert!(matches!(def.into_layout(), Err(ChordError::Validation(_))));
}

#[test]
fn test_missing_definition_file() {
    let err = LayoutDefinition::load_from_file("/no/such/definition.json").unwrap_err();
    assert!(matches!(err, ChordError::Io(_)));
}
