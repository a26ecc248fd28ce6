use std::path::PathBuf;

use treelox::{Diagnostics, LoxError, Loxer};

fn script(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("scripts").join(name) }

/// Collect the `// expect: ` annotations of a script, in order.
fn expected_output(source: &str) -> String {
	source.lines().filter_map(|line| line.split_once("// expect: ")).map(|(_, expected)| format!("{expected}\n")).collect()
}

/// Run a script with captured output and diagnostics.
fn run_script(name: &str) -> (String, String, Result<(), LoxError>, Diagnostics) {
	let source = std::fs::read_to_string(script(name)).unwrap();
	let mut loxer = Loxer::with_output(Vec::new());
	let mut diagnostics = Diagnostics::new();
	let result = loxer.run(&source, &mut diagnostics);
	(source, String::from_utf8(loxer.into_output()).unwrap(), result, diagnostics)
}

fn assert_script_output(name: &str) {
	let (source, output, result, diagnostics) = run_script(name);
	assert!(result.is_ok(), "{name} failed: {result:?}");
	assert!(diagnostics.is_empty());
	assert_eq!(output, expected_output(&source), "output of {name}");
}

#[test]
fn test_arithmetic_script() { assert_script_output("arithmetic.lox"); }

#[test]
fn test_logic_script() { assert_script_output("logic.lox"); }

#[test]
fn test_strings_script() { assert_script_output("strings.lox"); }

#[test]
fn test_runtime_error_script() {
	let (source, output, result, diagnostics) = run_script("runtime_error.lox");
	assert_eq!(output, expected_output(&source));
	assert_eq!(result.unwrap_err().exit_code(), 70);
	let rendered: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
	assert_eq!(rendered, vec!["operands must be two numbers or two strings for + operator.\n[line 2]"]);
}

#[test]
fn test_syntax_errors_script() {
	let (_, output, result, diagnostics) = run_script("syntax_errors.lox");
	assert_eq!(output, "");
	assert!(matches!(result, Err(LoxError::ScannerErrors(1))));
	let rendered: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
	assert_eq!(rendered, vec![
		"[line 5] Error: Unexpected character '@'.",
		"[line 2] Error at ';': Expect ')' after expression.",
		"[line 3] Error at ';': Expect expression.",
		"[line 4] Error at '2': Expect ';' after expression.",
		"[line 5] Error at ';': Expect expression.",
	]);
}

#[test]
fn test_lox_file() {
	let mut loxer = Loxer::with_output(Vec::new());
	assert!(loxer.run_file(script("arithmetic.lox")).is_ok());
	assert!(String::from_utf8(loxer.into_output()).unwrap().starts_with("17\n27\n"));
}

#[test]
fn test_missing_file() {
	let mut loxer = Loxer::with_output(Vec::new());
	let error = loxer.run_file(script("does_not_exist.lox")).unwrap_err();
	assert!(matches!(error, LoxError::InternalError(_)));
	assert_eq!(error.exit_code(), 74);
}
