//! Integration tests for CLI
//!
//! Run the built `routecast` binary against temporary config files. None of
//! these tests reach the weather provider.

use std::io::Write;
use std::process::{Command, Output};

const CONFIG: &str = r#"
[weather]
api_key = ""

[city_coordinates]
Tver = { lat = 56.8587, lon = 35.9176 }
Moscow = { lat = 55.7558, lon = 37.6173 }
"Нижний Новгород" = { lat = 56.3269, lon = 44.0059 }
"#;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn routecast(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_routecast"))
        .args(args)
        .env_remove("ROUTECAST_CONFIG_PATH")
        .env_remove("ROUTECAST_WEATHER__API_KEY")
        .env_remove("ACCUWEATHER_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn help_lists_subcommands() {
    let output = routecast(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["forecast", "places", "chat", "health"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn places_prints_sorted_names() {
    let config = write_config(CONFIG);
    let path = config.path().to_str().unwrap();

    let output = routecast(&["places", "--config", path]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, ["Moscow", "Tver", "Нижний Новгород"]);
}

#[test]
fn places_fails_without_city_table() {
    let config = write_config("[server]\nport = 8080\n");
    let path = config.path().to_str().unwrap();

    let output = routecast(&["places", "--config", path]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("city_coordinates"));
}

#[test]
fn places_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let output = routecast(&["places", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn forecast_without_api_key_fails() {
    let config = write_config(CONFIG);
    let path = config.path().to_str().unwrap();

    let output = routecast(&[
        "forecast", "--start", "Moscow", "--end", "Tver", "--config", path,
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("weather provider"));
}

#[test]
fn forecast_rejects_unknown_metric() {
    let output = routecast(&[
        "forecast", "--start", "Moscow", "--end", "Tver", "--metric", "pressure",
    ]);
    assert!(!output.status.success());
}
