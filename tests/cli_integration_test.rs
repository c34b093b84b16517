//! Integration tests for the `coolmap` binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Command with no ambient config: fresh working directory, no env config
fn coolmap(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coolmap"));
    cmd.current_dir(dir.path())
        .env_remove("COOLMAP_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("coolmap command failed");
    }
    serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
}

#[test]
fn test_score_json_has_documented_keys() {
    let dir = TempDir::new().unwrap();
    let json = json_output(coolmap(&dir).args(["score", "--format", "json"]));

    for key in ["indicators", "lcz", "score", "metric", "indicator_chart", "prototype"] {
        assert!(json.get(key).is_some(), "Missing {} key", key);
    }
    assert!(json.get("breakdown").is_none());
    assert_eq!(json["metric"], "43.5/100");
    assert_eq!(json["lcz"], "LCZ 1 - Compact High-Rise");
    assert_eq!(json["prototype"]["kind"], "placeholder");
    assert_eq!(json["prototype"]["text"], "Enable prototype tweak to visualize");
}

#[test]
fn test_score_json_with_tweak_and_explain() {
    let dir = TempDir::new().unwrap();
    let json = json_output(coolmap(&dir).args([
        "score",
        "--format",
        "json",
        "--ar",
        "0.5",
        "--svf",
        "1.0",
        "--psf",
        "0",
        "--far",
        "0.5",
        "--gsi",
        "0.1",
        "--lcz",
        "lczb",
        "--tweak",
        "--explain",
    ]));

    assert_eq!(json["metric"], "91.5/100");
    assert_eq!(json["prototype"]["kind"], "chart");
    assert_eq!(
        json["prototype"]["title"],
        "LCZ B - Scattered Trees\nBD: 60%, Veg: 30%, Height SD: 5m"
    );
    assert_eq!(json["breakdown"]["terms"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_score_reads_discovered_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".coolmap.toml"),
        indoc! {r#"
            [indicators]
            aspect_ratio = 0.5
            sky_view_factor = 1.0
            permeable_surface_fraction = 0.0
            floor_area_ratio = 0.5
            ground_space_index = 0.1

            [output]
            format = "json"
        "#},
    )
    .unwrap();

    let json = json_output(coolmap(&dir).arg("score"));
    assert_eq!(json["metric"], "91.5/100");
}

#[test]
fn test_invalid_discovered_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".coolmap.toml"), "[indicators\nbroken").unwrap();

    let json = json_output(coolmap(&dir).args(["score", "--format", "json"]));
    assert_eq!(json["metric"], "43.5/100");
}

#[test]
fn test_explicit_invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "not = [valid").unwrap();

    let output = coolmap(&dir)
        .args(["score", "--config", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config file"));
}

#[test]
fn test_markdown_report() {
    let dir = TempDir::new().unwrap();
    let output = coolmap(&dir)
        .args(["score", "--format", "markdown", "--tweak"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("# Urban Energy & Thermal Comfort Evaluator"));
    assert!(text.contains("43.5/100"));
    assert!(text.contains("BD: 60%, Veg: 30%, Height SD: 5m"));
}

#[test]
fn test_plain_terminal_report_writes_output_file() {
    let dir = TempDir::new().unwrap();
    coolmap(&dir)
        .args(["score", "--plain", "--output", "report.txt"])
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(text.contains("Estimated Cooling Efficiency Score: 43.5/100"));
    assert!(text.contains("Aspect Ratio (AR)"));
    assert!(text.is_ascii());
}

#[test]
fn test_init_creates_then_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    coolmap(&dir).arg("init").assert().success();
    let config_path = dir.path().join(".coolmap.toml");
    assert!(config_path.exists());

    fs::write(&config_path, "# edited\n").unwrap();
    let output = coolmap(&dir).arg("init").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "# edited\n");

    coolmap(&dir).args(["init", "--force"]).assert().success();
    assert_ne!(fs::read_to_string(&config_path).unwrap(), "# edited\n");
}

#[test]
fn test_zones_lists_all_labels() {
    let dir = TempDir::new().unwrap();
    let output = coolmap(&dir).arg("zones").output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    for label in [
        "LCZ 1 - Compact High-Rise",
        "LCZ 2 - Compact Mid-Rise",
        "LCZ 3 - Compact Low-Rise",
        "LCZ 6 - Open Low-Rise",
        "LCZ 8 - Large Low-Rise",
        "LCZ B - Scattered Trees",
        "LCZ D - Low Plants",
    ] {
        assert!(text.contains(label), "missing {}", label);
    }
}
