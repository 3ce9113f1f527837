// CLI behaviour: exit codes, stdout text and untouched files.
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jsonl-combine"))
}

fn run(args: &[&str]) -> Output {
    cmd().args(args).output().expect("run jsonl-combine")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

fn assert_usage(result: &Output, args: &[&str]) {
    assert_eq!(result.status.code(), Some(1), "args: {:?}", args);
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(
        stdout.starts_with("Usage: jsonl-combine <input_file> <output_file>"),
        "args: {:?}, stdout: {}",
        args,
        stdout
    );
}

#[test]
fn converts_and_reports_paths() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("input.jsonl");
    let output = temp.path().join("output.json");
    std::fs::write(&input, "{\"a\": 1}\n{\"b\": 2}\n").expect("write input");

    let result = run(&[path_str(&input), path_str(&output)]);

    assert_eq!(result.status.code(), Some(0));
    let stdout = String::from_utf8(result.stdout).expect("utf8");
    assert_eq!(
        stdout.trim_end(),
        format!(
            "Combined JSON objects from {} into {}",
            path_str(&input),
            path_str(&output)
        )
    );
    assert_eq!(
        std::fs::read_to_string(&output).expect("read output"),
        "[\n    {\n        \"a\": 1\n    },\n    {\n        \"b\": 2\n    }\n]"
    );
}

#[test]
fn wrong_argument_count_exits_with_usage() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("input.jsonl");
    let output = temp.path().join("output.json");
    let extra = temp.path().join("extra.json");
    std::fs::write(&input, "{\"a\": 1}\n").expect("write input");

    let cases: Vec<Vec<&str>> = vec![
        vec![],
        vec![path_str(&input)],
        vec![path_str(&input), path_str(&output), path_str(&extra)],
    ];
    for args in cases {
        assert_usage(&run(&args), &args);
    }

    assert!(!output.exists());
    assert!(!extra.exists());
}

#[test]
fn help_and_version_are_not_special() {
    for args in [["--help"], ["--version"], ["-h"], ["-V"]] {
        assert_usage(&run(&args), &args);
    }
}

#[test]
fn trailing_flag_counts_as_an_argument() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("input.jsonl");
    let output = temp.path().join("output.json");
    std::fs::write(&input, "{\"a\": 1}\n").expect("write input");

    for flag in ["-v", "--verbose", "--indent"] {
        let args = [path_str(&input), path_str(&output), flag];
        assert_usage(&run(&args), &args);
    }

    assert!(!output.exists());
}

#[test]
fn hyphen_prefixed_input_path_is_accepted() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::write(temp.path().join("-data.jsonl"), "{\"a\": 1}\n").expect("write input");

    let result = cmd()
        .current_dir(temp.path())
        .args(["-data.jsonl", "out.json"])
        .output()
        .expect("run jsonl-combine");

    assert_eq!(result.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&result.stdout).trim_end(),
        "Combined JSON objects from -data.jsonl into out.json"
    );
    assert_eq!(
        std::fs::read_to_string(temp.path().join("out.json")).expect("read output"),
        "[\n    {\n        \"a\": 1\n    }\n]"
    );
}

#[test]
fn malformed_line_fails_without_success_message() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("input.jsonl");
    let output = temp.path().join("output.json");
    std::fs::write(&input, "{\"a\": 1}\n{broken\n").expect("write input");

    let result = run(&[path_str(&input), path_str(&output)]);

    assert!(!result.status.success());
    assert!(!String::from_utf8_lossy(&result.stdout).contains("Combined JSON objects"));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Line 2"));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("absent.jsonl");
    let output = temp.path().join("output.json");

    let result = run(&[path_str(&input), path_str(&output)]);

    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
    assert!(!output.exists());
}
