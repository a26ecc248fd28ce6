use std::{
	fs::read_to_string,
	io::{Stdout, Write},
	path::Path,
};

use anyhow::{Context, anyhow};
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
	Diagnostics, LoxError, error::interpreter::InterpreterError, interpreter::Interpreter, parser::Parser,
	scanner::Scanner,
};

/// Loxer drives the scanner, parser and interpreter over whole sources.
pub struct Loxer<W: Write = Stdout> {
	interpreter: Interpreter<W>,
}

impl Loxer {
	pub fn new() -> Self { Self { interpreter: Interpreter::new() } }
}

impl Default for Loxer {
	fn default() -> Self { Self::new() }
}

impl<W: Write> Loxer<W> {
	/// Create a Loxer whose `print` output goes to `output`.
	pub fn with_output(output: W) -> Self { Self { interpreter: Interpreter::with_output(output) } }

	pub fn into_output(self) -> W { self.interpreter.into_output() }

	/// Run a script file, errors stay recorded for the whole file.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoxError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run_source(&source)
	}

	/// Run source text with its own diagnostics, printing them to stderr.
	pub fn run_source(&mut self, source: &str) -> Result<(), LoxError> {
		let mut diagnostics = Diagnostics::new();
		let result = self.run(source, &mut diagnostics);
		report(&mut diagnostics);
		result
	}

	/// Run the REPL prompt until end of input.
	///
	/// Every line is scanned, parsed and run on its own, a failing line does not
	/// affect the next one.
	pub fn run_prompt(&mut self) -> Result<(), LoxError> {
		let mut editor = DefaultEditor::new().map_err(|e| anyhow!("Failed start line editor: {e}"))?;
		let mut diagnostics = Diagnostics::new();
		loop {
			let line = match editor.readline("> ") {
				Ok(line) => line,
				Err(ReadlineError::Interrupted) => continue,
				Err(ReadlineError::Eof) => {
					println!("\nExited treelox repl");
					return Ok(());
				}
				Err(e) => return Err(anyhow!("Failed read line: {e}").into()),
			};
			if line.trim().is_empty() {
				continue;
			}
			if let Err(e) = editor.add_history_entry(line.as_str()) {
				eprintln!("Failed add history entry: {e}");
			}
			// Syntax and runtime errors were already reported, keep prompting.
			if let Err(LoxError::InternalError(e)) = self.run_line(&line, &mut diagnostics) {
				eprintln!("Failed run prompt: {e}");
			}
			report(&mut diagnostics);
		}
	}

	/// Run one interactive line, forgetting the errors of the previous one.
	pub fn run_line(&mut self, line: &str, diagnostics: &mut Diagnostics) -> Result<(), LoxError> {
		diagnostics.clear();
		self.run(line, diagnostics)
	}

	/// Scan and parse `source`, rendering every statement in prefix form.
	pub fn dump_ast(&self, source: &str) -> Result<String, LoxError> {
		let mut diagnostics = Diagnostics::new();
		let result = parse(source, &mut diagnostics);
		report(&mut diagnostics);
		Ok(result?.iter().map(|statement| format!("{statement}\n")).collect())
	}

	/// Run the Loxer on the given source code, recording errors.
	pub fn run(&mut self, source: &str, diagnostics: &mut Diagnostics) -> Result<(), LoxError> {
		let statements = parse(source, diagnostics)?;
		self.interpreter.interpret(&statements).map_err(|e| {
			if let InterpreterError::RuntimeError(error) = &e {
				diagnostics.runtime_error(error);
			}
			e.into()
		})
	}
}

/// Scan and parse, scanner errors win over parser errors.
fn parse(source: &str, diagnostics: &mut Diagnostics) -> Result<Vec<crate::statement::Statement>, LoxError> {
	let before = diagnostics.error_count();
	let tokens = Scanner::new(source).scan_tokens(diagnostics)?;
	let scan_errors = diagnostics.error_count() - before;
	// Parse anyway so syntax errors after a bad character show up too.
	let statements = Parser::new(tokens).parse(diagnostics);
	if scan_errors > 0 {
		return Err(LoxError::ScannerErrors(scan_errors));
	}
	statements
}

fn report(diagnostics: &mut Diagnostics) {
	for diagnostic in diagnostics.drain() {
		eprintln!("{diagnostic}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run(source: &str) -> (String, Result<(), LoxError>, Diagnostics) {
		let mut loxer = Loxer::with_output(Vec::new());
		let mut diagnostics = Diagnostics::new();
		let result = loxer.run(source, &mut diagnostics);
		(String::from_utf8(loxer.into_output()).unwrap(), result, diagnostics)
	}

	#[test]
	fn runs_programs() {
		let (output, result, diagnostics) = run("print \"sum: \" + \"3\";\nprint 1 + 2;");
		assert!(result.is_ok());
		assert!(diagnostics.is_empty());
		assert_eq!(output, "sum: 3\n3\n");
	}

	#[test]
	fn syntax_errors_skip_execution() {
		let (output, result, diagnostics) = run("print 1;\nprint (2;");
		assert_eq!(output, "");
		assert!(matches!(result, Err(LoxError::ParserErrors(1))));
		assert!(diagnostics.had_error());
		assert_eq!(result.unwrap_err().exit_code(), 65);
	}

	#[test]
	fn scanner_errors_win_but_parser_still_reports() {
		let (output, result, diagnostics) = run("print @;\nprint 1 +;");
		assert_eq!(output, "");
		assert!(matches!(result, Err(LoxError::ScannerErrors(1))));
		let rendered: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
		assert_eq!(rendered, vec![
			"[line 1] Error: Unexpected character '@'.",
			"[line 1] Error at ';': Expect expression.",
			"[line 2] Error at ';': Expect expression.",
		]);
	}

	#[test]
	fn runtime_errors_are_recorded() {
		let (output, result, diagnostics) = run("print 1;\nprint 2 * \"x\";\nprint 3;");
		assert_eq!(output, "1\n");
		assert_eq!(result.unwrap_err().exit_code(), 70);
		assert!(!diagnostics.had_error());
		assert!(diagnostics.had_runtime_error());
		assert_eq!(diagnostics.iter().next().unwrap().to_string(), "operands must be numbers\n[line 2]");
	}

	#[test]
	fn deep_nesting_is_a_syntax_error() {
		let source = format!("print 1;\nprint {}1{};", "(".repeat(1000), ")".repeat(1000));
		let (output, result, diagnostics) = run(&source);
		assert_eq!(output, "");
		assert_eq!(result.unwrap_err().exit_code(), 65);
		assert_eq!(diagnostics.iter().next().unwrap().to_string(), "[line 2] Error at '(': Too much nesting.");
	}

	#[test]
	fn prompt_lines_do_not_share_errors() {
		let mut loxer = Loxer::with_output(Vec::new());
		let mut diagnostics = Diagnostics::new();

		assert!(loxer.run_line("print (1;", &mut diagnostics).is_err());
		assert!(diagnostics.had_error());

		assert!(loxer.run_line("print -true;", &mut diagnostics).is_err());
		assert!(!diagnostics.had_error());
		assert!(diagnostics.had_runtime_error());

		assert!(loxer.run_line("print 42;", &mut diagnostics).is_ok());
		assert!(diagnostics.is_empty());
		assert_eq!(String::from_utf8(loxer.into_output()).unwrap(), "42\n");
	}

	#[test]
	fn dumps_ast_without_running() {
		let loxer = Loxer::with_output(Vec::new());
		assert_eq!(loxer.dump_ast("print -1 + 2;\n(1) == nil;").unwrap(), "(print (+ (- 1) 2))\n(; (== (group 1) nil))\n");
		assert!(matches!(loxer.dump_ast("print"), Err(LoxError::ParserErrors(1))));
		assert!(loxer.into_output().is_empty());
	}
}
