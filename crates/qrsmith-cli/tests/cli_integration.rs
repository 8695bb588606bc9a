use assert_cmd::Command;
use predicates::prelude::*;
use qrsmith_testing::{sample_values, till_template, write_template_file};
use tempfile::TempDir;

/// Test fixture with an isolated config file
struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("qrsmith").expect("binary builds");
        cmd.arg("--config")
            .arg(self.temp_dir.path().join("config.toml"));
        cmd
    }
}

#[test]
fn test_decode_flat_payload() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["decode", "52040000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("52 04 0000"));
}

#[test]
fn test_decode_nested_payload_indents_children() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["decode", "26150002GD010512345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  00 02 GD"))
        .stdout(predicate::str::contains("  01 05 12345"));
}

#[test]
fn test_decode_malformed_reports_offset() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["decode", "26"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("offset 2"));
}

#[test]
fn test_decode_partial_prefix_still_printed() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["decode", "5204000001"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("52 04 0000"))
        .stderr(predicate::str::contains("offset 10"));
}

#[test]
fn test_decode_json_format() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["--format", "json", "decode", "000201"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\": \"00\""))
        .stdout(predicate::str::contains("\"error\": null"));
}

#[test]
fn test_encode_from_template_file() {
    let fixture = TestFixture::new();
    let template = till_template();
    let path = write_template_file(fixture.temp_dir.path(), &template).expect("write template");

    let data = serde_json::to_string(&serde_json::Value::Object(sample_values())).unwrap();
    fixture
        .cmd()
        .args(["encode", "--strict", "--data", &data, "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "00020126160002GD01061234565204000054071250.005802KE5911Acme Stores",
        ));
}

#[test]
fn test_encode_strict_fails_on_missing_value() {
    let fixture = TestFixture::new();
    let template = till_template();
    let path = write_template_file(fixture.temp_dir.path(), &template).expect("write template");

    fixture
        .cmd()
        .args(["encode", "--strict", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("required tag"));
}

#[test]
fn test_encode_from_catalog_with_placeholders() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["encode", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00020154010"));
}

#[test]
fn test_preview_shows_json_and_tlv() {
    let fixture = TestFixture::new();
    let template = till_template();
    let path = write_template_file(fixture.temp_dir.path(), &template).expect("write template");

    fixture
        .cmd()
        .args(["preview", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"amount\""))
        .stdout(predicate::str::contains("TLV "));
}

#[test]
fn test_journey_list_contains_seeded_journeys() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["journey", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01  cooptill"))
        .stdout(predicate::str::contains("03  mpesa"));
}

#[test]
fn test_template_show_unknown_id_fails() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["template", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template not found"));
}

#[test]
fn test_config_set_reports_flags() {
    let fixture = TestFixture::new();
    fixture
        .cmd()
        .args(["config", "set", "01", "2", "--active", "--default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("template 2"))
        .stdout(predicate::str::contains("[active, default]"));
}

#[test]
fn test_composite_config_file_is_honored() {
    let fixture = TestFixture::new();
    std::fs::write(
        fixture.temp_dir.path().join("config.toml"),
        "composite_tags = [\"62\"]\n",
    )
    .expect("write config");

    // The shape heuristic would nest this payload; the config's explicit
    // set omits tag 26, so it must stay a single flat entry.
    fixture
        .cmd()
        .args(["decode", "26150002GD010512345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("26 15 0002GD010512345"))
        .stdout(predicate::str::contains("  00 02 GD").not());
}

#[test]
fn test_config_tilde_path_expands_to_home() {
    let home = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        home.path().join("qrsmith.toml"),
        "composite_tags = [\"62\"]\n",
    )
    .expect("write config");

    // If "~" were taken literally the config would not be found and the
    // heuristic would nest the payload.
    let mut cmd = Command::cargo_bin("qrsmith").expect("binary builds");
    cmd.env("HOME", home.path())
        .args(["--config", "~/qrsmith.toml", "decode", "26150002GD010512345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("26 15 0002GD010512345"))
        .stdout(predicate::str::contains("  00 02 GD").not());
}
