use crate::scanner::Token;

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A syntax error, tagged with the token the parser was looking at.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}: {type}")]
pub struct ParseError {
	pub line:   usize,
	/// `None` when the offending token is the end of input.
	pub lexeme: Option<String>,
	pub r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(token: &Token, r#type: ParseErrorType) -> Self {
		let lexeme = (!token.is_eof()).then(|| token.lexeme.clone());
		Self { line: token.line, lexeme, r#type }
	}

	/// Where the error happened, in the ` at 'x'` / ` at end` form.
	pub fn location(&self) -> String {
		match &self.lexeme {
			Some(lexeme) => format!(" at '{lexeme}'"),
			None => " at end".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	ExpectedExpression,
	/// A specific token was required, the payload is the message to show.
	Expected(&'static str),
	ExpectedVariableName,
	UnterminatedParenthesis,
	TrailingTokens,
	/// Groupings or unary operators nested past the parser's limit.
	TooDeep,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expect expression.")
			}
			Expected(message) => {
				write!(f, "{message}")
			}
			ExpectedVariableName => {
				write!(f, "Expect variable name.")
			}
			UnterminatedParenthesis => {
				write!(f, "Expect ')' after expression.")
			}
			TrailingTokens => {
				write!(f, "Expect end of expression.")
			}
			TooDeep => {
				write!(f, "Too much nesting.")
			}
		}
	}
}
