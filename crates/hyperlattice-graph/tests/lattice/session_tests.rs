//! Scripted sessions, scene capture and configuration loading.

use std::io::Write;

use hyperlattice_graph::{LatticeConfig, LatticeError, Navigator, SceneSnapshot};

use crate::common::{default_graph, init_tracing};

#[test]
fn test_session_walks_away_from_origin() {
    println!("\n=== TEST: Scripted Session ===");
    init_tracing();
    let mut nav = Navigator::new(LatticeConfig::default()).expect("valid");
    let moves = nav.run_script(&"F".repeat(100)).expect("run");

    println!("  anchor {} after {} moves", nav.frame().anchor(), moves);
    assert_eq!(nav.ticks(), 100);
    assert!(moves >= 3);
    assert!(nav.frame().anchor().depth() >= 3);
    assert!(nav.frame().relative().s < nav.graph().config().branch_length);
}

#[test]
fn test_bad_script_is_rejected_before_running() {
    let mut nav = Navigator::new(LatticeConfig::default()).expect("valid");
    let result = nav.run_script("FFQ");
    assert!(matches!(
        result,
        Err(LatticeError::UnknownInput {
            symbol: 'Q',
            position: 2
        })
    ));
    assert_eq!(nav.ticks(), 0);
}

#[test]
fn test_scene_json_is_consumable() {
    let graph = default_graph();
    let scene = SceneSnapshot::capture(&graph);
    let json = serde_json::to_string(&scene).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

    let marks = value["marks"].as_array().expect("marks");
    assert_eq!(marks.len(), 56);
    assert!(marks
        .iter()
        .all(|m| m["screen"].as_array().map(|p| p.len()) == Some(2)));
}

#[test]
fn test_config_file_drives_graph_size() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "frame_radius = 2").expect("write");
    writeln!(file, "vertex_radius = 1").expect("write");

    let config = LatticeConfig::from_file(file.path()).expect("load");
    let nav = Navigator::new(config).expect("valid");
    assert_eq!(nav.graph().frame_count(), 1 + 5 + 14);
}
