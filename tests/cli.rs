use std::path::Path;
use std::process::{Command, Output};

fn hey_calc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hey-calc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hey-calc")
}

fn hey_calc_with_log(rust_log: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hey-calc"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("failed to run hey-calc")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn calc_prints_sum() {
    let output = hey_calc(&["calc", "2", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\n");

    let output = hey_calc(&["calc", "-1", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n");

    let output = hey_calc(&["calc", "2.5", "0.5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3.0\n");
}

#[test]
fn calc_rejects_text_and_number() {
    let output = hey_calc(&["calc", "1", "a"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported operand types"), "{stderr}");
}

#[test]
fn greet_prints_one_line() {
    let output = hey_calc(&["greet", "World"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hey, World!\n");

    let output = hey_calc(&["greet", ""]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hey, !\n");
}

#[test]
fn run_executes_job_file() {
    let jobfile = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/Jobfile.toml");
    let output = hey_calc(&["run", "-J", jobfile.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\n3.0\nfoobar\nHey, World!\n");
}

#[test]
fn calc_concatenates_float_words() {
    let output = hey_calc(&["calc", "hello ", "infinity"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello infinity\n");
}

#[test]
fn greet_accepts_hyphenated_name() {
    let output = hey_calc(&["greet", "-x"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hey, -x!\n");
}

#[test]
fn verbose_logs_to_stderr() {
    let output = hey_calc(&["-v", "greet", "World"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hey, World!\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parsed arguments"), "{stderr}");
}

#[test]
fn quiet_by_default() {
    let output = hey_calc(&["greet", "World"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn rust_log_overrides_verbose() {
    let output = hey_calc_with_log("off", &["-v", "greet", "World"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hey, World!\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("parsed arguments"), "{stderr}");
}
