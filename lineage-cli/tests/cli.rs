use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("lineage-parser")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn convert_register_to_latex_on_stdout() {
    let workdir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("lineage");
    cmd.current_dir(workdir.path())
        .arg(fixture_path("doe-register.txt"));

    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("\\generationtitle{Second Generation}")
                .and(predicate::str::contains("\\entry{67890}"))
                .and(predicate::str::contains("\\hyperlink{person3}")),
        )
        .stderr(
            predicate::str::contains("Successfully processed 4 entries")
                .and(predicate::str::contains("Skipped 0 entries")),
        );

    let skip_log = fs::read_to_string(workdir.path().join("skipped_entries.log")).unwrap();
    assert!(skip_log.is_empty());
}

#[test]
fn convert_to_tag_into_output_file() {
    let workdir = TempDir::new().unwrap();
    let output = workdir.path().join("register.xml");
    let mut cmd = cargo_bin_cmd!("lineage");
    cmd.current_dir(workdir.path())
        .arg(fixture_path("doe-register.txt"))
        .arg("--to")
        .arg("tag")
        .arg("--output")
        .arg(&output);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.starts_with("<register>"));
    assert!(rendered.contains("<entry id=\"2\">"));
}

#[test]
fn output_extension_selects_format() {
    let workdir = TempDir::new().unwrap();
    let output = workdir.path().join("register.json");
    let mut cmd = cargo_bin_cmd!("lineage");
    cmd.current_dir(workdir.path())
        .arg(fixture_path("doe-register.txt"))
        .arg("-o")
        .arg(&output);

    cmd.assert().success();

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.trim_start().starts_with('['));
    assert!(rendered.contains("\"67891\""));
}

#[test]
fn malformed_record_goes_to_skip_log() {
    let workdir = TempDir::new().unwrap();
    let input = workdir.path().join("register.txt");
    fs::write(
        &input,
        "1. Jane Doe, born 1801.\nShe farmed.\n\n12346.\nLost text.\n\n3. John Doe, born 1803.\n",
    )
    .unwrap();
    let skip_log = workdir.path().join("skipped.txt");

    let mut cmd = cargo_bin_cmd!("lineage");
    cmd.current_dir(workdir.path())
        .arg(&input)
        .arg("--skip-log")
        .arg(&skip_log);

    cmd.assert().success().stderr(
        predicate::str::contains("Successfully processed 2 entries")
            .and(predicate::str::contains("Skipped 1 entries")),
    );

    let log = fs::read_to_string(&skip_log).unwrap();
    assert!(log.starts_with("Entry 12346:"));
}

#[test]
fn config_file_sets_default_format() {
    let workdir = TempDir::new().unwrap();
    let config = workdir.path().join("lineage.toml");
    fs::write(&config, "[output]\nformat = \"yaml\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("lineage");
    cmd.current_dir(workdir.path())
        .arg(fixture_path("doe-register.txt"))
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("head: Peter Doe")
                .and(predicate::str::contains("\\entry{").not()),
        );
}

#[test]
fn unknown_format_fails() {
    let workdir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("lineage");
    cmd.current_dir(workdir.path())
        .arg(fixture_path("doe-register.txt"))
        .arg("--to")
        .arg("docx");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Available formats:").and(predicate::str::contains("latex")));
}

#[test]
fn missing_input_fails() {
    let workdir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("lineage");
    cmd.current_dir(workdir.path()).arg("does-not-exist.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read does-not-exist.txt"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("lineage");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("latex")
            .and(predicate::str::contains("tag"))
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml")),
    );
}
