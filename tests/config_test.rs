//! Tests for server configuration loading.

use std::fs;
use tempfile::TempDir;
use tictactoe_rpc::ServerConfig;

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 7350);
    assert_eq!(config.log_filter(), "info,tictactoe_rpc=debug");
}

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        "host = \"0.0.0.0\"\nport = 9000\nlog_filter = \"warn\"\n",
    )
    .expect("Failed to write TOML");

    let config = ServerConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 9000);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_missing_keys_take_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "port = 8080\n").expect("Failed to write TOML");

    let config = ServerConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, ServerConfig::default().with_port(8080));
}

#[test]
fn test_overrides() {
    let config = ServerConfig::default().with_host("::1").with_port(1);
    assert_eq!(config.host(), "::1");
    assert_eq!(*config.port(), 1);
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = ServerConfig::from_file(&path).expect_err("invalid TOML");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_key_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("typo.toml");
    fs::write(&path, "prot = 1\n").expect("Write failed");

    assert!(ServerConfig::from_file(&path).is_err());
}

#[test]
fn test_nonexistent_file_fails() {
    let err = ServerConfig::from_file("/this/path/does/not/exist.toml").expect_err("missing");
    assert!(err.message.contains("Failed to read config file"));
}
