use std::process::{Command, Output};

fn braille() -> Command {
    Command::new(env!("CARGO_BIN_EXE_braille"))
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout not UTF-8")
}

#[test]
fn encodes_text_as_concatenated_braille_patterns() {
    let output = braille()
        .args(["braille", "AB"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "100000110000\n");
}

#[test]
fn decodes_a_braille_pattern_to_ascii() {
    let output = braille()
        .args(["ascii", "100000"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "A\n");
}

#[test]
fn decodes_a_braille_pattern_to_unicode() {
    let output = braille()
        .args(["unicode", "100000"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2801}\n");
}

#[test]
fn target_encoding_is_case_insensitive() {
    let output = braille()
        .args(["BRAILLE", "A"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "100000\n");
}

#[test]
fn wrong_argument_count_is_fatal() {
    let output = braille()
        .args(["braille"])
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn extra_arguments_are_fatal() {
    let output = braille()
        .args(["braille", "A", "B"])
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_target_encoding_is_fatal() {
    let output = braille()
        .args(["hexadecimal", "A"])
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn conversion_failures_are_reported_on_stdout() {
    let output = braille()
        .args(["ascii", "111111"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Error: "));
    assert!(output.stderr.is_empty());
}

#[test]
fn braille_mode_reports_errors_after_partial_output() {
    let output = braille()
        .args(["braille", "A!"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("100000Error: "));
}
