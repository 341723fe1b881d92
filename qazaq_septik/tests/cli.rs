// End-to-end tests for the `septik` binary.
//
// Runs the compiled binary as a child process, feeding words through
// arguments or stdin, and checks what lands on stdout and the exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use qazaq_septik::{Declined, Paradigm, Septik};

fn septik(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_septik"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut pipe = child.stdin.take().unwrap();
    if let Some(input) = stdin {
        pipe.write_all(input.as_bytes()).unwrap();
    }
    drop(pipe);

    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "septik failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_default_case_is_instrumental() {
    let output = septik(&["Қазақ", "Қыз"], None);
    assert_eq!(stdout_of(&output), "Қазақпен\nҚызбен\n");
}

#[test]
fn test_case_by_code_and_name() {
    let by_code = septik(&["--case", "1", "Алма"], None);
    let by_name = septik(&["-c", "ілік", "Алма"], None);
    assert_eq!(stdout_of(&by_code), "Алманың\n");
    assert_eq!(stdout_of(&by_name), "Алманың\n");
}

#[test]
fn test_words_from_stdin() {
    let output = septik(&["--case", "dative"], Some("Алма\n\nӘсел\n"));
    assert_eq!(stdout_of(&output), "Алмаға\nӘселге\n");
}

#[test]
fn test_json_output() {
    let output = septik(&["--case", "4", "--format", "json", "Мектеп"], None);
    let forms: Vec<Declined> = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].text, "Мектепте");
    assert_eq!(forms[0].septik, Septik::Locative);
}

#[test]
fn test_all_cases_json() {
    let output = septik(&["--all", "--format", "json", "Алма"], None);
    let paradigms: Vec<Paradigm> = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(paradigms.len(), 1);
    assert_eq!(paradigms[0].forms.len(), 6);
    assert_eq!(paradigms[0].get(Septik::Accusative).unwrap().text, "Алманы");
}

#[test]
fn test_bad_case_exits_with_usage_error() {
    let output = septik(&["--case", "0", "Алма"], None);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
