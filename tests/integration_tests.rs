use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command with HOME pointed at an empty directory so no user config leaks in
fn textkit(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env("HOME", home.path());
    cmd
}

fn write_home_config(home: &TempDir, contents: &str) {
    let dir = home.path().join(".config").join("textkit");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_cli_help_flag() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Regex tester, JSON formatter"));
}

#[test]
fn test_cli_version_flag() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("textkit"));
}

#[test]
fn test_fixture_files_exist() {
    for name in ["simple.json", "invalid.json", "style.css", "contacts.txt"] {
        assert!(fixture_path(name).exists(), "missing fixture {}", name);
    }
}

#[test]
fn test_json_format_from_file() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["json", "format"])
        .arg(fixture_path("simple.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"name\": \"Alice\",\n  \"address\": {\n"));
}

#[test]
fn test_json_minify_from_stdin_with_stats() {
    let home = TempDir::new().unwrap();
    let input = fs::read_to_string(fixture_path("simple.json")).unwrap();

    textkit(&home)
        .args(["json", "minify", "--stats"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::eq(
            "{\"name\":\"Alice\",\"address\":{\"city\":\"Seattle\",\"zip\":\"98101\"},\"tags\":[\"admin\",\"dev\"]}\n",
        ))
        .stderr(predicate::str::contains("keys: 5, depth: 2"));
}

#[test]
fn test_json_invalid_file_reports_position() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["json", "format"])
        .arg(fixture_path("invalid.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON input"))
        .stderr(predicate::str::contains("position 18"));
}

#[test]
fn test_json_empty_stdin_fails() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["json", "format"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input"));
}

#[test]
fn test_json_output_mode() {
    let home = TempDir::new().unwrap();
    let output = textkit(&home)
        .args(["--json", "json", "minify"])
        .write_stdin("[1, {\"a\": null}]")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["output"], "[1,{\"a\":null}]");
    assert_eq!(report["stats"]["keys"], 1);
    assert_eq!(report["stats"]["depth"], 2);
}

#[test]
fn test_config_indent_is_used() {
    let home = TempDir::new().unwrap();
    write_home_config(&home, "[json]\nindent = 4\n");

    textkit(&home)
        .args(["json", "format"])
        .write_stdin("{\"a\":1}")
        .assert()
        .success()
        .stdout(predicate::eq("{\n    \"a\": 1\n}\n"));
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let home = TempDir::new().unwrap();
    write_home_config(&home, "[json\nindent = 4\n");

    textkit(&home)
        .args(["json", "format"])
        .write_stdin("{\"a\":1}")
        .assert()
        .success()
        .stdout(predicate::eq("{\n  \"a\": 1\n}\n"))
        .stderr(predicate::str::contains("Warning: Invalid config"));
}

#[test]
fn test_regex_on_file() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["regex", r"[a-z]+@[a-z]+\.[a-z]{2,}"])
        .arg(fixture_path("contacts.txt"))
        .assert()
        .success()
        .stdout(predicate::eq(
            "10: juan@example.com\n28: maria@test.org\n47: info@company.es\n",
        ))
        .stderr(predicate::str::contains("3 matches"));
}

#[test]
fn test_regex_json_output() {
    let home = TempDir::new().unwrap();
    let output = textkit(&home)
        .args(["--json", "regex", "x*"])
        .write_stdin("ab")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["count"], 3);
    assert_eq!(report["matches"][2]["index"], 2);
}

#[test]
fn test_regex_invalid_pattern_fails() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["regex", "(unclosed"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn test_regex_example_html() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["regex", "--example", "url", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<mark>https://example.com/page</mark>"));
}

#[test]
fn test_minify_css_file() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["minify", "css", "--stats"])
        .arg(fixture_path("style.css"))
        .assert()
        .success()
        .stdout(predicate::eq(".header{color:#333;margin:0 auto}\n"))
        .stderr(predicate::str::contains("% saved"));
}

#[test]
fn test_minify_js_from_stdin() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["minify", "js"])
        .write_stdin("// c\nlet x = 1;\nreturn(x);\n")
        .assert()
        .success()
        .stdout(predicate::eq("let x=1;return (x);\n"));
}

#[test]
fn test_lorem_words() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["lorem", "--unit", "words", "--count", "5"])
        .assert()
        .success()
        .stdout(predicate::eq("lorem ipsum dolor sit amet\n"));
}

#[test]
fn test_lorem_config_defaults() {
    let home = TempDir::new().unwrap();
    write_home_config(&home, "[lorem]\nunit = \"words\"\ncount = 3\n");

    textkit(&home)
        .arg("lorem")
        .assert()
        .success()
        .stdout(predicate::eq("lorem ipsum dolor\n"));
}

#[test]
fn test_lorem_count_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["lorem", "--unit", "paragraphs", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Count must be between 1 and 20"));
}

#[test]
fn test_count_file() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .arg("count")
        .arg(fixture_path("contacts.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 8"))
        .stdout(predicate::str::contains("Sentences: 5"))
        .stdout(predicate::str::contains("Paragraphs: 2"))
        .stdout(predicate::str::contains("Lines: 4"));
}

#[test]
fn test_html_markdown() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["html", "--markdown"])
        .write_stdin("## Notes\n\n- one\n- **two**")
        .assert()
        .success()
        .stdout(predicate::eq(
            "<h2>Notes</h2><ul>\n<li>one</li>\n<li><strong>two</strong></li>\n</ul>\n",
        ));
}

#[test]
fn test_base64_round_trip() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["base64", "encode"])
        .write_stdin("hola ñ")
        .assert()
        .success()
        .stdout(predicate::eq("aG9sYSDDsQ==\n"));

    textkit(&home)
        .args(["base64", "decode"])
        .write_stdin("aG9sYSDDsQ==")
        .assert()
        .success()
        .stdout(predicate::eq("hola ñ\n"));
}

#[test]
fn test_base64_decode_invalid_fails() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["base64", "decode"])
        .write_stdin("@@@")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base64 error"));
}

#[test]
fn test_copy_with_osc52_backend() {
    let home = TempDir::new().unwrap();
    write_home_config(&home, "[clipboard]\nbackend = \"osc52\"\n");

    textkit(&home)
        .args(["--copy", "base64", "encode"])
        .write_stdin("hi")
        .assert()
        .success()
        .stdout(predicate::eq("aGk=\n"))
        .stderr(predicate::str::contains("\x1b]52;c;YUdrPQ==\x07"));
}

#[test]
fn test_nonexistent_input_file_fails() {
    let home = TempDir::new().unwrap();
    textkit(&home)
        .args(["count", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
