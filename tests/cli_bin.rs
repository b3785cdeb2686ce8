use connectfour::{GameConfig, COLUMNS, ROWS, RUN_LENGTH};
use std::process::Command;

#[test]
fn config_subcommand_prints_defaults() {
    let output = Command::new(env!("CARGO_BIN_EXE_connectfour"))
        .arg("config")
        .output()
        .expect("failed to run connectfour binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let config: GameConfig = toml::from_str(&stdout).expect("invalid toml");
    assert_eq!(config, GameConfig::default());
    assert_eq!((config.rows, config.columns, config.run_length), (ROWS, COLUMNS, RUN_LENGTH));
}

#[test]
fn config_output_loads_back() {
    let output = Command::new(env!("CARGO_BIN_EXE_connectfour"))
        .arg("config")
        .output()
        .expect("failed to run connectfour binary");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("connectfour.toml");
    std::fs::write(&path, &output.stdout).unwrap();
    assert_eq!(GameConfig::load(&path).unwrap(), GameConfig::default());
}
