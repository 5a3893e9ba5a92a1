use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn salat(home: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("salat");
    cmd.env("NO_COLOR", "1")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .args(["--root", home.path().to_str().unwrap()]);
    cmd
}

#[test]
fn test_nearest_exact_match() {
    let dir = TempDir::new().unwrap();

    salat(&dir)
        .args(["nearest", "--lat", "23.8103", "--lon", "90.4125"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dhaka (0.0 km)"));
}

#[test]
fn test_nearest_json() {
    let dir = TempDir::new().unwrap();

    let output = salat(&dir)
        .args(["--format", "json", "nearest", "--lat", "24.9", "--lon", "91.87"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["location"]["name"], "Sylhet");
    assert!(json["distance_km"].as_f64().unwrap() < 1.0);
}

#[test]
fn test_nearest_negative_coordinates_with_custom_catalog() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".salat.toml"),
        r#"
[[locations]]
name = "East"
latitude = 0.0
longitude = 10.0

[[locations]]
name = "West"
latitude = 0.0
longitude = -10.0
"#,
    )
    .unwrap();

    salat(&dir)
        .args(["nearest", "--lat", "-1.5", "--lon", "-9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("West"));
}

#[test]
fn test_nearest_empty_catalog_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".salat.toml"), "locations = []\n").unwrap();

    salat(&dir)
        .args(["nearest", "--lat", "23.8", "--lon", "90.4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no reference locations configured"));
}

#[test]
fn test_nearest_save_creates_config() {
    let dir = TempDir::new().unwrap();

    salat(&dir)
        .args(["nearest", "--lat", "22.85", "--lon", "89.54", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Khulna"))
        .stderr(predicate::str::contains("Saved location 'Khulna'"));

    let content = fs::read_to_string(dir.path().join(".salat.toml")).unwrap();
    assert!(content.contains("location = \"Khulna\""));
}

#[test]
fn test_nearest_save_preserves_existing_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".salat.toml");
    fs::write(&path, "# personal\ntwelve_hour = true\nlocation = \"Dhaka\"\n").unwrap();

    salat(&dir)
        .args(["nearest", "--lat", "25.74", "--lon", "89.27", "--save"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# personal"));
    assert!(content.contains("twelve_hour = true"));
    assert!(content.contains("location = \"Rangpur\""));
}

#[test]
fn test_nearest_rejects_invalid_coordinates() {
    let dir = TempDir::new().unwrap();

    salat(&dir)
        .args(["nearest", "--lat", "NaN", "--lon", "90.4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between -90 and 90"));

    salat(&dir)
        .args(["nearest", "--lat", "23.8", "--lon", "400"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between -180 and 180"));
}
