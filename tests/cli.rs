use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

fn markdown2html(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_markdown2html"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run markdown2html")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = markdown2html(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Usage: "));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_one_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("README.md");
    fs::write(&input, "# Hi\n").unwrap();

    let output = markdown2html(&[&input]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("<input_markdown_file> <output_html_file>"));
}

#[test]
fn test_missing_input_leaves_output_untouched() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.md");
    let out = dir.path().join("out.html");

    let output = markdown2html(&[&input, &out]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim_end(), format!("Missing {}", input.display()));
    assert!(!out.exists());
}

#[test]
fn test_directory_input_counts_as_missing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.html");

    let output = markdown2html(&[dir.path(), &out]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Missing "));
    assert!(!out.exists());
}

#[test]
fn test_converts_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("README.md");
    let out = dir.path().join("README.html");
    fs::write(&input, "# Hi\n**x**\n- a\n- b\n").unwrap();

    let output = markdown2html(&[&input, &out]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "<h1>Hi</h1>\n<strong>x</strong>\n<ul><li>a</li><li>b</li></ul>"
    );
}

#[test]
fn test_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.md");
    let out = dir.path().join("out.html");
    fs::write(&input, "*new*").unwrap();
    fs::write(&out, "old contents that are longer").unwrap();

    let output = markdown2html(&[&input, &out]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&out).unwrap(), "<em>new</em>");
}

#[test]
fn test_extra_arguments_are_ignored() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.md");
    let out = dir.path().join("out.html");
    fs::write(&input, "## Two").unwrap();

    let output = markdown2html(&[&input, &out, Path::new("surplus")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&out).unwrap(), "<h2>Two</h2>");
}

#[test]
fn test_no_lists_flag() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.md");
    let out = dir.path().join("out.html");
    fs::write(&input, "- **a**\n").unwrap();

    let output = markdown2html(&[Path::new("--no-lists"), &input, &out]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&out).unwrap(), "- <strong>a</strong>\n");
}

#[test]
fn test_config_file_disables_lists() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("md2html.toml");
    let input = dir.path().join("in.md");
    let out = dir.path().join("out.html");
    fs::write(&config, "[passes]\nlists = false\n").unwrap();
    fs::write(&input, "1. one\n").unwrap();

    let output = markdown2html(&[Path::new("--config"), &config, &input, &out]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&out).unwrap(), "1. one\n");
}

#[test]
fn test_bad_config_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("md2html.toml");
    let input = dir.path().join("in.md");
    let out = dir.path().join("out.html");
    fs::write(&config, "[passes\n").unwrap();
    fs::write(&input, "text").unwrap();

    let output = markdown2html(&[Path::new("--config"), &config, &input, &out]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse config file"));
    assert!(!out.exists());
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.md");
    let out = dir.path().join("no_such_dir").join("out.html");
    fs::write(&input, "text").unwrap();

    let output = markdown2html(&[&input, &out]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error writing "));
}

#[rstest]
#[case("--help")]
#[case("-V")]
fn test_single_flag_is_usage_error(#[case] flag: &str) {
    let output = markdown2html(&[Path::new(flag)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Usage: "));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_with_paths_still_shows_help() {
    let output = markdown2html(&[Path::new("--help"), Path::new("out.html")]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Convert a Markdown file to HTML"));
}

#[rstest]
#[case("-notes.md")]
#[case("-hello.md")]
#[case("--draft.md")]
fn test_hyphen_prefixed_input_is_converted(#[case] name: &str) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(name), "# Hi").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_markdown2html"))
        .current_dir(dir.path())
        .args([name, "out.html"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run markdown2html");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        fs::read_to_string(dir.path().join("out.html")).unwrap(),
        "<h1>Hi</h1>"
    );
}
