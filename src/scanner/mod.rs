//! Represents a lexical token in the Lox language.
//!
//! Keywords are part of the shape of the language's grammar, so the parser
//! often has code like, "If the next token is `print` then do ...". That means
//! the parser wants to know not just that it has a lexeme for some identifier,
//! but that it has a reserved word, and which keyword it is. At the point that
//! we recognize a lexeme, we also remember which kind of lexeme it represents.
//!
//! There are lexemes for literal values, numbers and strings. Since the scanner
//! has to walk each character in the literal to correctly identify it, it also
//! converts that textual representation to the value the interpreter uses.
//!
//! We can't easily detect a `reserved word` until we've reached the end of what
//! might instead be an identifier, this is `maximal munch`.
//!
//! The scanner walks decoded characters, so multi-byte text inside string
//! literals is preserved as is. Outside of strings only ASCII is meaningful.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub use token::*;

use crate::{
	Diagnostics, LoxError,
	error::scanner::{ScanError, ScanErrorType, ScannerError},
};

/// A scanner for Lox source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the last consumed character
	cursor:      usize,
	/// Tracks what source line `cursor` is on so we can produce tokens that know
	/// their location.
	line:        usize,
	tokens:      Vec<Token>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, tokens: Vec::new() }
	}

	/// Scan all tokens from the source code.
	///
	/// Lexical errors are recorded into `diagnostics` and scanning carries on,
	/// so one pass reports every bad character. The returned stream always ends
	/// with exactly one [`TokenType::Eof`].
	pub fn scan_tokens(mut self, diagnostics: &mut Diagnostics) -> Result<Vec<Token>, LoxError> {
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			match self.scan_token() {
				Err(ScannerError::ScanError(e)) => diagnostics.report(&e),
				Err(ScannerError::InternalError(e)) => return Err(e.into()),
				Ok(_) => {}
			}
		}
		self.tokens.push(Token::eof(self.line));
		Ok(self.tokens)
	}

	/// Scan a single lexeme, pushing a token unless it is whitespace or a
	/// comment.
	fn scan_token(&mut self) -> Result<(), ScannerError> {
		let next_char = self.advance().context("Unexpected EOF")?;
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				return Ok(());
			} else { Slash },
			' ' | '\r' | '\t' => return Ok(()),
			'\n' => { self.line += 1; return Ok(()); }
			'"' => self.string()?,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			_ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char)).into()),
		};

		let lexeme = &self.source[self.start..self.cursor];
		self.tokens.push(Token::new(r#type, lexeme, self.line));

		Ok(())
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a string literal. Escape sequences are not processed.
	fn string(&mut self) -> Result<TokenType, ScannerError> {
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		self.peek().ok_or_else(|| ScanError::new(self.line, ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(StringLiteral(value.to_string()))
	}

	/// Scan a number literal
	fn number(&mut self) -> Result<TokenType, ScannerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part, a trailing '.' stays a separate token.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let s = &self.source[self.start..self.cursor];
		Ok(NumberLiteral(s.parse().context("Failed to parse number literal")?))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}
