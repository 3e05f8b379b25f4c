// Integration tests for the simulated code runner

use learn_lld::runner::errors::RunnerError;
use learn_lld::runner::output::simulated_message;
use learn_lld::runner::{
    CodeRunner, OutputSource, OutputTable, RunStatus, RunnerOptions, RUNNING_PLACEHOLDER,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(1000);

fn runner(source: &str, language: &str) -> CodeRunner {
    CodeRunner::new(RunnerOptions::new(source, language)).with_delay(DELAY)
}

/// Run at `start` and complete one delay later, returning the output
fn run_to_completion(runner: &mut CodeRunner, start: Instant) -> String {
    assert!(runner.run_at(start), "run was not accepted");
    assert!(runner.poll(start + DELAY), "run did not complete");
    runner.output().map(str::to_string).unwrap_or_default()
}

struct FailingSource;

impl OutputSource for FailingSource {
    fn simulate(&self, _language: &str, _source: &str) -> Result<String, RunnerError> {
        Err(RunnerError::simulation("transcript unavailable"))
    }
}

#[test]
fn test_initial_state() {
    let r = runner("let x = 1;", "typescript");
    assert_eq!(r.status(), RunStatus::Idle);
    assert_eq!(r.output(), None);
    assert_eq!(r.source(), "let x = 1;");
    assert_eq!(r.label(), "Typescript");
    assert!(r.can_run());
}

#[test]
fn test_typescript_output_is_preamble_plus_transcript() {
    let mut r = runner("class A {}", "typescript");
    let output = run_to_completion(&mut r, Instant::now());
    assert_eq!(
        output,
        "// Output for typescript:\n// Code execution simulated for educational purposes\n[LOG]: Creating a new instance\n[LOG]: Method called successfully\n[LOG]: Operation completed"
    );
    assert_eq!(r.status(), RunStatus::Completed);
}

#[test]
fn test_javascript_output_is_preamble_plus_transcript() {
    let mut r = runner("console.log(1)", "javascript");
    let output = run_to_completion(&mut r, Instant::now());
    assert_eq!(
        output,
        "// Output for javascript:\n// Code execution simulated for educational purposes\nconsole.log() output would appear here\n> Example return value"
    );
}

#[test]
fn test_other_languages_get_simulated_message() {
    for language in ["java", "csharp", "ruby"] {
        let mut r = runner("code", language);
        let output = run_to_completion(&mut r, Instant::now());
        assert_eq!(
            output,
            format!(
                "Code execution for {} is simulated.\nThis is an educational example to demonstrate how interactive code might work.",
                language
            )
        );
    }
}

#[test]
fn test_python_ignores_its_table_entry() {
    let table = OutputTable::builtin();
    assert!(table.transcript("python").is_some());

    let mut r = runner("print(1)", "python");
    let output = run_to_completion(&mut r, Instant::now());
    assert_eq!(output, simulated_message("python"));
    assert_ne!(
        output,
        ">>> Running Python code\n>>> Operation completed successfully"
    );
}

#[test]
fn test_placeholder_until_delay_elapses() {
    let mut r = runner("x", "typescript");
    let start = Instant::now();
    assert!(r.run_at(start));
    assert_eq!(r.status(), RunStatus::Running);
    assert_eq!(r.output(), Some(RUNNING_PLACEHOLDER));

    assert!(!r.poll(start + Duration::from_millis(999)));
    assert_eq!(r.output(), Some(RUNNING_PLACEHOLDER));
    assert!(r.poll(start + DELAY));
    assert_eq!(r.status(), RunStatus::Completed);
}

#[test]
fn test_run_while_running_is_noop() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let mut r = CodeRunner::new(
        RunnerOptions::new("x", "typescript").on_run(move |_| *counter.borrow_mut() += 1),
    )
    .with_delay(DELAY);

    let start = Instant::now();
    assert!(r.run_at(start));
    assert!(!r.run_at(start + Duration::from_millis(500)));
    assert_eq!(*calls.borrow(), 1);

    // Completion is measured from the first accepted run
    assert!(r.poll(start + DELAY));
    assert!(!r.poll(start + DELAY * 2));
}

#[test]
fn test_run_again_after_completion() {
    let mut r = runner("x", "javascript");
    let start = Instant::now();
    run_to_completion(&mut r, start);
    assert!(r.run_at(start + DELAY * 2));
    assert_eq!(r.output(), Some(RUNNING_PLACEHOLDER));
}

#[test]
fn test_on_run_receives_current_source() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut r = CodeRunner::new(
        RunnerOptions::new("let a = 1;", "typescript")
            .on_run(move |source| sink.borrow_mut().push(source.to_string())),
    );

    assert!(r.edit("let b = 2;"));
    r.run_at(Instant::now());
    assert_eq!(*seen.borrow(), vec!["let b = 2;".to_string()]);
}

#[test]
fn test_read_only_rejects_edit_and_run() {
    let mut r = CodeRunner::new(RunnerOptions::new("fixed", "typescript").read_only(true));
    assert!(!r.edit("changed"));
    assert!(!r.insert_char('!'));
    assert!(!r.backspace());
    assert_eq!(r.source(), "fixed");

    assert!(!r.can_run());
    assert!(!r.run_at(Instant::now()));
    assert_eq!(r.status(), RunStatus::Idle);
    assert_eq!(r.output(), None);
}

#[test]
fn test_edit_while_running_keeps_status() {
    let mut r = runner("abc", "typescript");
    let start = Instant::now();
    r.run_at(start);
    assert!(r.insert_char('d'));
    assert!(r.backspace());
    assert!(r.backspace());
    assert_eq!(r.source(), "ab");
    assert_eq!(r.status(), RunStatus::Running);
    assert_eq!(r.output(), Some(RUNNING_PLACEHOLDER));
}

#[test]
fn test_simulation_error_is_rendered() {
    let mut r = runner("x", "typescript").with_output_source(Rc::new(FailingSource));
    let output = run_to_completion(&mut r, Instant::now());
    assert_eq!(output, "Error: transcript unavailable");
    assert_eq!(r.status(), RunStatus::Completed);
}

#[test]
fn test_custom_table_falls_back_for_missing_transcript() {
    let table = OutputTable::from_entries([("typescript", "ts only")]);
    let mut r = runner("x", "javascript").with_output_source(Rc::new(table));
    let output = run_to_completion(&mut r, Instant::now());
    assert!(output.ends_with("Code executed successfully"));
    assert!(output.starts_with("// Output for javascript:"));
}

#[test]
fn test_display_state_mirrors_runner() {
    let mut r = runner("src", "typescript").with_delay(Duration::ZERO);
    let now = Instant::now();
    r.run_at(now);
    r.poll(now);
    let state = r.display_state();
    assert_eq!(state.source, "src");
    assert_eq!(state.status, RunStatus::Completed);
    assert!(state.output.is_some_and(|o| o.contains("[LOG]")));
}
