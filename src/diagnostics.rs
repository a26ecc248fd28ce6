//! Error accumulation for one run of the pipeline.
//!
//! The scanner, parser and interpreter never print. They record what went
//! wrong into a [`Diagnostics`] value owned by whoever drives the run, and
//! that caller decides when and where to show the records and which exit
//! status they imply.

use std::fmt::Display;

use crate::{
	error::{interpreter::RuntimeError, parser::ParseError, scanner::ScanError},
	scanner::Token,
};

/// What kind of failure a [`Diagnostic`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	/// Lexical or syntax error, the input was rejected before running.
	Syntax,
	/// The program failed while running.
	Runtime,
}

/// A single reported error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub severity: Severity,
	pub line:     usize,
	/// ` at 'x'`, ` at end`, or empty when no token is involved.
	pub location: String,
	pub message:  String,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.severity {
			Severity::Syntax => write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message),
			Severity::Runtime => write!(f, "{}\n[line {}]", self.message, self.line),
		}
	}
}

impl From<&ScanError> for Diagnostic {
	fn from(error: &ScanError) -> Self {
		Self { severity: Severity::Syntax, line: error.line, location: String::new(), message: error.r#type.to_string() }
	}
}

impl From<&ParseError> for Diagnostic {
	fn from(error: &ParseError) -> Self {
		Self { severity: Severity::Syntax, line: error.line, location: error.location(), message: error.r#type.to_string() }
	}
}

impl From<&RuntimeError> for Diagnostic {
	fn from(error: &RuntimeError) -> Self {
		Self { severity: Severity::Runtime, line: error.line, location: String::new(), message: error.r#type.to_string() }
	}
}

/// Collects the errors of one run.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
	records: Vec<Diagnostic>,
}

impl Diagnostics {
	pub fn new() -> Self { Self::default() }

	/// Record an error, see the `From` impls on [`Diagnostic`].
	pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) { self.records.push(diagnostic.into()); }

	/// Record a syntax error that is only known by its line.
	pub fn error_line(&mut self, line: usize, message: impl Into<String>) {
		self.report(Diagnostic { severity: Severity::Syntax, line, location: String::new(), message: message.into() });
	}

	/// Record a syntax error at a token.
	pub fn error_token(&mut self, token: &Token, message: impl Into<String>) {
		let location = if token.is_eof() { " at end".to_string() } else { format!(" at '{}'", token.lexeme) };
		self.report(Diagnostic { severity: Severity::Syntax, line: token.line, location, message: message.into() });
	}

	pub fn runtime_error(&mut self, error: &RuntimeError) { self.report(error); }

	/// Whether any lexical or syntax error was recorded.
	pub fn had_error(&self) -> bool { self.records.iter().any(|d| d.severity == Severity::Syntax) }

	pub fn had_runtime_error(&self) -> bool { self.records.iter().any(|d| d.severity == Severity::Runtime) }

	/// Number of syntax errors recorded.
	pub fn error_count(&self) -> usize { self.records.iter().filter(|d| d.severity == Severity::Syntax).count() }

	pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> { self.records.iter() }

	pub fn is_empty(&self) -> bool { self.records.is_empty() }

	/// Forget everything recorded so far.
	pub fn clear(&mut self) { self.records.clear(); }

	/// Take all records out, leaving the accumulator empty.
	pub fn drain(&mut self) -> impl Iterator<Item = Diagnostic> + '_ { self.records.drain(..) }
}
