pub mod interpreter;
pub mod parser;
pub mod scanner;

/// LoxError is the top-level error type for the Lox interpreter.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// Internal interpreter error or a failed IO operation
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Scanner errors encountered during scanning
	#[error("Generated {0} scanner errors")]
	ScannerErrors(usize),
	/// Parser errors encountered during parsing
	#[error("Generated {0} parser errors")]
	ParserErrors(usize),
	/// Runtime error encountered during interpretation
	#[error("Runtime error:\n{0}")]
	RuntimeError(#[from] interpreter::RuntimeError),
}

impl LoxError {
	/// Process exit status for this error, in the sysexits convention.
	/// Usage errors (64) are handled by the command line parser.
	pub fn exit_code(&self) -> u8 {
		match self {
			LoxError::ScannerErrors(_) | LoxError::ParserErrors(_) => 65,
			LoxError::RuntimeError(_) => 70,
			LoxError::InternalError(_) => 74,
		}
	}
}

impl From<interpreter::InterpreterError> for LoxError {
	fn from(error: interpreter::InterpreterError) -> Self {
		match error {
			interpreter::InterpreterError::InternalError(e) => LoxError::InternalError(e),
			interpreter::InterpreterError::RuntimeError(e) => LoxError::RuntimeError(e),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::{Token, TokenType};

	#[test]
	fn exit_codes_separate_syntax_from_runtime() {
		assert_eq!(LoxError::ScannerErrors(1).exit_code(), 65);
		assert_eq!(LoxError::ParserErrors(2).exit_code(), 65);
		assert_eq!(LoxError::InternalError(anyhow::anyhow!("disk gone")).exit_code(), 74);

		let runtime = interpreter::RuntimeError::new(
			&Token::new(TokenType::Minus, "-", 1),
			interpreter::RuntimeErrorType::OperandMustBeNumber,
		);
		assert_eq!(LoxError::from(runtime).exit_code(), 70);
	}
}
