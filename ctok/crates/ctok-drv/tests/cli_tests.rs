//! CLI Interface E2E Tests
//!
//! These tests run the `ctok` binary against fixture sources, standard input
//! and configuration files, checking stdout, stderr and the exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Builds a `ctok` command isolated from any configuration on the host.
fn ctok(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ctok").expect("ctok binary should be built");
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join("xdg"))
        .env_remove("CTOK_CONFIG")
        .env_remove("CTOK_VERBOSE")
        .env_remove("CTOK_NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

fn sandbox() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

const COUNTDOWN_TOKENS: &str = "\
<KEYWORD, int>
<IDENTIFIER, main>
<PUNCTUATION, (>
<PUNCTUATION, )>
<PUNCTUATION, {>
<KEYWORD, int>
<IDENTIFIER, n>
<OPERATOR, =>
<NUMBER, 10>
<PUNCTUATION, ;>
<KEYWORD, while>
<PUNCTUATION, (>
<IDENTIFIER, n>
<PUNCTUATION, )>
<PUNCTUATION, {>
<IDENTIFIER, n>
<OPERATOR, =>
<IDENTIFIER, n>
<OPERATOR, ->
<NUMBER, 1>
<PUNCTUATION, ;>
<PUNCTUATION, }>
<KEYWORD, return>
<IDENTIFIER, n>
<PUNCTUATION, ;>
<PUNCTUATION, }>
";

#[test]
fn test_cli_help() {
    let dir = sandbox();
    ctok(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--overflow")));
}

#[test]
fn test_cli_version() {
    let dir = sandbox();
    ctok(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ctok ").and(predicate::str::contains(env!(
            "CARGO_PKG_VERSION"
        ))));
}

#[test]
fn test_stdin_declaration() {
    let dir = sandbox();
    ctok(&dir)
        .write_stdin("int x = 42;")
        .assert()
        .success()
        .stdout(
            "<KEYWORD, int>\n<IDENTIFIER, x>\n<OPERATOR, =>\n<NUMBER, 42>\n<PUNCTUATION, ;>\n",
        )
        .stderr("");
}

#[test]
fn test_empty_and_blank_input() {
    let dir = sandbox();
    ctok(&dir).write_stdin("").assert().success().stdout("");
    ctok(&dir)
        .write_stdin(" \t\r\n\x0b\x0c\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_unknown_characters_are_tokens() {
    let dir = sandbox();
    ctok(&dir)
        .write_stdin("a>=b")
        .assert()
        .success()
        .stdout("<IDENTIFIER, a>\n<UNKNOWN, >>\n<OPERATOR, =>\n<IDENTIFIER, b>\n");
}

#[test]
fn test_file_input() {
    let dir = sandbox();
    ctok(&dir)
        .arg(fixtures_dir().join("countdown.c"))
        .assert()
        .success()
        .stdout(COUNTDOWN_TOKENS);
}

#[test]
fn test_files_in_order_with_stdin_dash() {
    let dir = sandbox();
    ctok(&dir)
        .arg(fixtures_dir().join("countdown.c"))
        .arg("-")
        .write_stdin("else")
        .assert()
        .success()
        .stdout(format!("{}<KEYWORD, else>\n", COUNTDOWN_TOKENS));
}

#[test]
fn test_mixed_fixture() {
    let dir = sandbox();
    let output = ctok(&dir)
        .arg(fixtures_dir().join("mixed.c"))
        .output()
        .expect("Failed to run ctok");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "<KEYWORD, float>");
    assert_eq!(lines[1], "<IDENTIFIER, area>");
    assert!(lines.contains(&"<UNKNOWN, %>"));
    assert!(lines.contains(&"<KEYWORD, if>"));
    assert_eq!(lines.last(), Some(&"<PUNCTUATION, ;>"));
}

#[test]
fn test_missing_input_file() {
    let dir = sandbox();
    ctok(&dir)
        .arg("does-not-exist.c")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: ").and(predicate::str::contains(
            "does-not-exist.c",
        )));
}

#[test]
fn test_json_format() {
    let dir = sandbox();
    ctok(&dir)
        .args(["--format", "json"])
        .write_stdin("x=1")
        .assert()
        .success()
        .stdout(
            "{\"kind\":\"IDENTIFIER\",\"lexeme\":\"x\"}\n\
             {\"kind\":\"OPERATOR\",\"lexeme\":\"=\"}\n\
             {\"kind\":\"NUMBER\",\"lexeme\":\"1\"}\n",
        );
}

#[test]
fn test_truncation_by_default_limit() {
    let dir = sandbox();
    let long = "a".repeat(1500);
    ctok(&dir)
        .write_stdin(format!("{};", long))
        .assert()
        .success()
        .stdout(format!("<IDENTIFIER, {}>\n<PUNCTUATION, ;>\n", "a".repeat(1023)))
        .stderr(
            predicate::str::contains("lexeme truncated")
                .and(predicate::str::contains("1500"))
                .and(predicate::str::contains("1023")),
        );
}

#[test]
fn test_truncation_warning_is_one_line_per_lexeme() {
    let dir = sandbox();
    let input = format!("{} {}", "b".repeat(1100), "9".repeat(1100));
    let output = ctok(&dir)
        .arg("--no-color")
        .write_stdin(input)
        .output()
        .expect("Failed to run ctok");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let warnings: Vec<&str> = stderr
        .lines()
        .filter(|line| line.contains("lexeme truncated"))
        .collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|line| line.contains("WARN")));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_read_failure_names_input() {
    let dir = sandbox();
    ctok(&dir)
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: Cannot read input").and(
            predicate::str::contains(dir.path().to_string_lossy().into_owned()),
        ));
}

#[test]
fn test_overflow_grow() {
    let dir = sandbox();
    let long = "7".repeat(1500);
    ctok(&dir)
        .args(["--overflow", "grow"])
        .write_stdin(long.clone())
        .assert()
        .success()
        .stdout(format!("<NUMBER, {}>\n", long));
}

#[test]
fn test_overflow_reject_fails() {
    let dir = sandbox();
    ctok(&dir)
        .args(["--overflow", "reject", "--max-lexeme-len", "8"])
        .write_stdin("ok = 123456789;")
        .assert()
        .failure()
        .code(1)
        .stdout("<IDENTIFIER, ok>\n<OPERATOR, =>\n")
        .stderr(predicate::str::contains("NUMBER lexeme at byte 5 is 9 bytes long"));
}

#[test]
fn test_limit_below_minimum_is_rejected() {
    let dir = sandbox();
    ctok(&dir)
        .args(["--max-lexeme-len", "3"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the minimum of 6"));
}

#[test]
fn test_invalid_overflow_value() {
    let dir = sandbox();
    ctok(&dir)
        .args(["--overflow", "wrap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown overflow policy"));
}

#[test]
fn test_stats_go_to_stderr() {
    let dir = sandbox();
    ctok(&dir)
        .arg("--stats")
        .write_stdin("if (x) y;")
        .assert()
        .success()
        .stdout(predicate::str::contains("<KEYWORD, if>").and(predicate::str::contains("total").not()))
        .stderr(
            predicate::str::contains("KEYWORD      1")
                .and(predicate::str::contains("total        6 tokens, 9 bytes, 0 truncated")),
        );
}

#[test]
fn test_config_file_in_current_directory() {
    let dir = sandbox();
    fs::write(
        dir.path().join("ctok.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    ctok(&dir)
        .write_stdin("1")
        .assert()
        .success()
        .stdout("{\"kind\":\"NUMBER\",\"lexeme\":\"1\"}\n");
}

#[test]
fn test_explicit_config_and_flag_override() {
    let dir = sandbox();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "[lexer]\nmax_lexeme_len = 6\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    ctok(&dir)
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "text"])
        .write_stdin("abcdefgh")
        .assert()
        .success()
        .stdout("<IDENTIFIER, abcdef>\n");
}

#[test]
fn test_config_from_environment() {
    let dir = sandbox();
    let config_path = dir.path().join("env.toml");
    fs::write(&config_path, "[lexer]\noverflow = \"reject\"\nmax_lexeme_len = 6\n").unwrap();

    ctok(&dir)
        .env("CTOK_CONFIG", &config_path)
        .write_stdin("returned")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IDENTIFIER lexeme at byte 0 is 8 bytes long"));
}

#[test]
fn test_missing_explicit_config() {
    let dir = sandbox();
    ctok(&dir)
        .args(["--config", "nope.toml"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_malformed_config() {
    let dir = sandbox();
    fs::write(dir.path().join("ctok.toml"), "[lexer]\noverflow = \"sideways\"\n").unwrap();
    ctok(&dir)
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_print_config() {
    let dir = sandbox();
    ctok(&dir)
        .args(["--print-config", "--overflow", "grow", "-f", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[lexer]")
                .and(predicate::str::contains("max_lexeme_len = 1023"))
                .and(predicate::str::contains("overflow = \"grow\""))
                .and(predicate::str::contains("format = \"json\"")),
        );
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = sandbox();
    ctok(&dir)
        .args(["--verbose", "--no-color"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("<IDENTIFIER, x>\n")
        .stderr(predicate::str::contains("scan started"));
}

#[test]
fn test_invalid_utf8_passes_through() {
    let dir = sandbox();
    ctok(&dir)
        .write_stdin(vec![b'a', 0xFF, b'b'])
        .assert()
        .success()
        .stdout(b"<IDENTIFIER, a>\n<UNKNOWN, \xFF>\n<IDENTIFIER, b>\n".to_vec());
}
