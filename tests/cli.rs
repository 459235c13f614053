use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;

fn vimeo_update_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vimeo-update").expect("Failed to find vimeo-update binary");
    cmd.env_remove("VIMEO_UPDATE_FORMAT")
        .env_remove("VIMEO_UPDATE_STRICT");
    cmd
}

#[test]
fn test_no_flags_prints_empty_object() -> Result<(), Box<dyn Error>> {
    vimeo_update_cmd()
        .assert()
        .success()
        .stdout("{}\n");
    Ok(())
}

#[test]
fn test_name_and_privacy_as_json() -> Result<(), Box<dyn Error>> {
    let output = vimeo_update_cmd()
        .args(["--name", " My Video ", "--privacy", "unlisted"])
        .output()?;
    assert!(output.status.success());

    let parameters: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        parameters,
        serde_json::json!({"name": "My Video", "privacy.view": "unlisted"})
    );
    Ok(())
}

#[test]
fn test_form_output() -> Result<(), Box<dyn Error>> {
    vimeo_update_cmd()
        .args([
            "--format",
            "form",
            "--privacy",
            "password",
            "--password",
            "abc123",
            "--allow-download",
            "false",
        ])
        .assert()
        .success()
        .stdout("password=abc123&privacy.download=false&privacy.view=password\n");
    Ok(())
}

#[test]
fn test_format_from_environment() -> Result<(), Box<dyn Error>> {
    vimeo_update_cmd()
        .env("VIMEO_UPDATE_FORMAT", "form")
        .args(["--comments", "contacts"])
        .assert()
        .success()
        .stdout("privacy.comments=contacts\n");
    Ok(())
}

#[test]
fn test_missing_password_passes_through() -> Result<(), Box<dyn Error>> {
    vimeo_update_cmd()
        .args(["--format", "form", "--privacy", "password"])
        .assert()
        .success()
        .stdout("password=&privacy.view=password\n");
    Ok(())
}

#[test]
fn test_missing_password_fails_in_strict_mode() -> Result<(), Box<dyn Error>> {
    vimeo_update_cmd()
        .args(["--strict", "--privacy", "password"])
        .assert()
        .failure()
        .stderr(contains("no password was given"));
    Ok(())
}

#[test]
fn test_spatial_parameters() -> Result<(), Box<dyn Error>> {
    vimeo_update_cmd()
        .args([
            "--format",
            "form",
            "--stereo-format",
            "top-bottom",
            "--director-timeline",
            "3:-10:45",
        ])
        .assert()
        .success()
        .stdout("spatial.director_timeline%5B0%5D.pitch=-10&spatial.director_timeline%5B0%5D.time_code=3&spatial.director_timeline%5B0%5D.yaw=45&spatial.stereo_format=top-bottom\n");
    Ok(())
}

#[test]
fn test_invalid_timeline_entry() -> Result<(), Box<dyn Error>> {
    vimeo_update_cmd()
        .args(["--director-timeline", "3:-10"])
        .assert()
        .failure()
        .stderr(contains("invalid director timeline entry"));
    Ok(())
}

#[test]
fn test_invalid_privacy_value() -> Result<(), Box<dyn Error>> {
    vimeo_update_cmd()
        .args(["--privacy", "everyone"])
        .assert()
        .failure()
        .stderr(contains("--privacy"));
    Ok(())
}

#[test]
fn test_metadata_file_with_flag_override() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let metadata_file = dir.path().join("update.json");
    std::fs::write(
        &metadata_file,
        r#"{"name": "from file", "comments": "anybody", "spatial": {"field_of_view": 45}}"#,
    )?;

    vimeo_update_cmd()
        .arg("--metadata-file")
        .arg(&metadata_file)
        .args(["--format", "form", "--name", "from flag"])
        .assert()
        .success()
        .stdout("name=from%20flag&privacy.comments=anybody&spatial.field_of_view=45\n");
    Ok(())
}

#[test]
fn test_metadata_file_parse_error() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let metadata_file = dir.path().join("update.json");
    std::fs::write(&metadata_file, r#"{"privacy": "everyone"}"#)?;

    vimeo_update_cmd()
        .arg("--metadata-file")
        .arg(&metadata_file)
        .assert()
        .failure()
        .stderr(contains("failed to parse"));
    Ok(())
}
