//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Stats Command
// =============================================================================

const SIMPLE: &str = "The cat sat on the mat. The dog ran fast.";

/// Write `content` to a file named `name` in a fresh temp dir.
fn fixture(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn stats_prints_counts() {
    let (_dir, path) = fixture("simple.txt", SIMPLE);
    cmd()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Words: 10"))
        .stdout(predicate::str::contains("Total Sentences: 2"))
        .stdout(predicate::str::contains("Average Sentence Length: 5.00"));
}

#[test]
fn stats_json_has_all_fields() {
    let (_dir, path) = fixture("simple.txt", SIMPLE);
    let output = cmd()
        .args(["--json", "stats", path.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stats --json should output valid JSON");
    assert_eq!(json["total_words"], 10);
    assert_eq!(json["total_sentences"], 2);
    assert_eq!(json["total_monosyllabic_words"], 10);
    assert_eq!(json["total_bisyllabic_words"], 0);
}

#[test]
fn stats_strips_markdown_files() {
    let (_dir, path) = fixture(
        "doc.md",
        "# A Long Heading Here\n\nThe cat sat on the mat.\n\n```\nlet x = compute();\n```\n",
    );
    let output = cmd()
        .args(["--json", "stats", path.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["total_words"], 6);
    assert_eq!(json["total_sentences"], 1);
}

#[test]
fn stats_empty_file_fails() {
    let (_dir, path) = fixture("empty.txt", "   \n");
    cmd()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn stats_missing_file_fails() {
    cmd()
        .args(["stats", "/nonexistent/legibility/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_prints_every_formula_by_default() {
    let (_dir, path) = fixture("simple.txt", SIMPLE);
    cmd()
        .args(["score", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch Reading Ease:"))
        .stdout(predicate::str::contains("Flesch-Kincaid Grade:"))
        .stdout(predicate::str::contains("Dale-Chall:"))
        .stdout(predicate::str::contains("Gunning Fog:"))
        .stdout(predicate::str::contains("SMOG:"))
        .stdout(predicate::str::contains("FORCAST:"));
}

#[test]
fn score_formula_flag_limits_output() {
    let (_dir, path) = fixture("simple.txt", SIMPLE);
    let output = cmd()
        .args([
            "--json",
            "score",
            path.to_str().unwrap(),
            "--formula",
            "smog",
            "-f",
            "gunning-fog",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let scores = json["scores"].as_object().unwrap();
    assert_eq!(scores.len(), 2);
    assert!(scores.contains_key("smog"));
    assert!(scores.contains_key("gunning_fog"));
}

#[test]
fn score_unknown_formula_fails() {
    let (_dir, path) = fixture("simple.txt", SIMPLE);
    cmd()
        .args(["score", path.to_str().unwrap(), "--formula", "coleman-liau"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn score_json_includes_stats_and_seed() {
    let (_dir, path) = fixture("simple.txt", SIMPLE);
    let output = cmd()
        .args(["--json", "score", path.to_str().unwrap(), "--seed", "5"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("score --json should output valid JSON");
    assert_eq!(json["seed"], 5);
    assert_eq!(json["total_words"], 10);
    assert!(json["file"].as_str().unwrap().ends_with("simple.txt"));
    assert_eq!(json["over_max"], false);
}

#[test]
fn score_seed_is_reproducible() {
    let (_dir, path) = fixture(
        "long.txt",
        &"Readability formulas estimate difficulty. Short words help. ".repeat(40),
    );
    let run = || {
        let output = cmd()
            .args(["--json", "score", path.to_str().unwrap(), "--seed", "123"])
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap()
    };
    assert_eq!(run()["scores"], run()["scores"]);
}

#[test]
fn score_max_grade_pass() {
    let (_dir, path) = fixture("simple.txt", SIMPLE);
    cmd()
        .args(["score", path.to_str().unwrap(), "--max-grade", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn score_max_grade_fail() {
    let (_dir, path) = fixture(
        "dense.txt",
        "Institutional considerations necessitate comprehensive organizational documentation.",
    );
    cmd()
        .args(["score", path.to_str().unwrap(), "--max-grade", "6"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL:"))
        .stderr(predicate::str::contains("grade exceeds 6.0"));
}

#[test]
fn score_multiple_files_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.md");
    std::fs::write(&a, SIMPLE).unwrap();
    std::fs::write(&b, "# Title\n\nShort words help.\n").unwrap();

    let output = cmd()
        .args(["--json", "score", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = json.as_array().expect("several files give an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["total_words"], 3);
}

#[test]
fn score_custom_word_list() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let doc = dir.path().join("doc.txt");
    std::fs::write(&words, "the\ncat\nsat\non\nmat\ndog\nran\nfast\n").unwrap();
    std::fs::write(&doc, SIMPLE).unwrap();

    let output = cmd()
        .args([
            "--json",
            "score",
            doc.to_str().unwrap(),
            "--formula",
            "dale-chall",
            "--word-list",
            words.to_str().unwrap(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["scores"]["dale_chall"].as_f64().is_some());
}

#[test]
fn score_requires_a_file() {
    cmd()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_respects_input_limit() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".legibility.toml"), "max_input_bytes = 10\n").unwrap();
    std::fs::write(dir.path().join("doc.txt"), SIMPLE).unwrap();

    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "score", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
