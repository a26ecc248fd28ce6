use crate::scanner::Token;

/// Errors that can occur during interpretation
#[derive(thiserror::Error, Debug)]
pub enum InterpreterError {
	/// Failure outside the language itself, e.g. the output sink went away
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// An operator got operands it cannot act on
	#[error(transparent)]
	RuntimeError(#[from] RuntimeError),
}

/// A runtime error, tagged with the operator token for line reporting.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{type}\n[line {line}]")]
pub struct RuntimeError {
	pub line:   usize,
	pub lexeme: String,
	pub r#type: RuntimeErrorType,
}

impl RuntimeError {
	pub fn new(token: &Token, r#type: RuntimeErrorType) -> Self {
		Self { line: token.line, lexeme: token.lexeme.clone(), r#type }
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
	/// Unary `-` on anything but a number.
	OperandMustBeNumber,
	/// Comparison or arithmetic on anything but two numbers.
	OperandsMustBeNumbers,
	/// `+` on anything but two numbers or two strings.
	OperandsMustBeNumbersOrStrings,
	/// A `var` declaration reached the interpreter.
	UnsupportedDeclaration,
}

impl std::fmt::Display for RuntimeErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use RuntimeErrorType::*;
		match self {
			OperandMustBeNumber => write!(f, "operand must be a number"),
			OperandsMustBeNumbers => write!(f, "operands must be numbers"),
			OperandsMustBeNumbersOrStrings => write!(f, "operands must be two numbers or two strings for + operator."),
			UnsupportedDeclaration => write!(f, "variable declarations are not supported"),
		}
	}
}
