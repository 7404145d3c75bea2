use std::process::Command;

use egui::Pos2;
use nodegrid::store::ReplayError;
use nodegrid::{MutationScript, NodeGraphStore, StoreConfig};

#[test]
fn test_history_script_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut store = NodeGraphStore::new();
    store.add_node(Pos2::new(10.0, 20.0)).unwrap();
    store.add_line_to_node(0).unwrap();
    store.add_column_to_node(0).unwrap();
    store.edit_data_cell(0, 0, 0, "42").unwrap();
    store.copy_node(0, 1).unwrap();
    std::fs::write(&path, store.history_script().to_json().unwrap()).unwrap();

    let script = MutationScript::load(&path).unwrap();
    assert_eq!(script, store.history_script());

    let mut replayed = NodeGraphStore::new();
    assert_eq!(script.apply(&mut replayed).unwrap(), 5);
    assert_eq!(replayed.state(), store.state());
}

#[test]
fn test_missing_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = MutationScript::load(&path).unwrap_err();
    assert!(matches!(err, ReplayError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_cli_replays_script_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("script.json");
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &script_path,
        r#"[
            { "type": "addNode", "position": [10, 20] },
            { "type": "copyNode", "index": 2, "count": 1 },
            { "type": "setZoom", "value": 2.5 }
        ]"#,
    )
    .unwrap();
    std::fs::write(&config_path, r#"{ "new_node_title": "Fresh" }"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_nodegrid"))
        .arg("--seed")
        .arg("--config")
        .arg(&config_path)
        .arg(&script_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let titles: Vec<_> = snapshot["graph"]["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|node| node["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Test Node 1", "Test Node 2", "Fresh", "Fresh - copy"]);
    assert_eq!(snapshot["viewport"]["zoom"], 2.5);

    let config = StoreConfig::load(&config_path).unwrap();
    assert_eq!(config.new_node_title, "Fresh");
}

#[test]
fn test_cli_fails_on_rejected_step() {
    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("bad.json");
    std::fs::write(&script_path, r#"[{ "type": "deleteNode", "index": 0 }]"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_nodegrid"))
        .arg(&script_path)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
