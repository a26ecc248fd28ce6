//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Expression`
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//!
//! Grammar:
//!
//! ``` BNF
//! program        → declaration* EOF ;
//! declaration    → varDecl | statement ;
//! varDecl        → "var" IDENTIFIER ( "=" expression )? ";" ;
//! statement      → printStmt | exprStmt ;
//! printStmt      → "print" expression ";" ;
//! exprStmt       → expression ";" ;
//! expression     → equality ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | primary ;
//! primary        → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" ;
//! ```
//!
//! A syntax error inside one statement is recorded, the parser skips ahead to
//! the next statement boundary and keeps going, so a single pass reports every
//! broken statement.
//!
//! Groupings and unary operators may nest at most [`MAX_NESTING`] deep, past
//! that the expression is rejected with a syntax error.

pub mod expression;

use TokenType::*;

use crate::{
	Diagnostics, LoxError,
	error::parser::{ParseError, ParseErrorType, ParserError},
	parser::expression::Expression,
	scanner::{Token, TokenType},
	statement::Statement,
};

/// How deep groupings and unary operators may nest inside one expression.
pub const MAX_NESTING: usize = 256;

/// Recursive descent parser over a scanned token stream.
pub struct Parser {
	/// The tokens to parse, always terminated by `Eof`.
	tokens:  Vec<Token>,
	current: usize,
	/// Groupings and unary operators currently open.
	depth:   usize,
}

impl Parser {
	pub fn new(mut tokens: Vec<Token>) -> Self {
		if !tokens.last().is_some_and(Token::is_eof) {
			let line = tokens.last().map_or(1, |token| token.line);
			tokens.push(Token::eof(line));
		}
		Self { tokens, current: 0, depth: 0 }
	}

	/// Parse a whole program.
	///
	/// Every syntax error is recorded into `diagnostics`. If there was at least
	/// one, the statements parsed around it are dropped and
	/// [`LoxError::ParserErrors`] is returned.
	pub fn parse(mut self, diagnostics: &mut Diagnostics) -> Result<Vec<Statement>, LoxError> {
		let mut statements = Vec::new();
		let mut error_count = 0;
		while !self.is_at_end() {
			match self.declaration() {
				Ok(statement) => statements.push(statement),
				Err(ParserError::ParseError(e)) => {
					diagnostics.report(&e);
					error_count += 1;
					self.synchronize();
				}
				Err(ParserError::InternalError(e)) => return Err(e.into()),
			}
		}
		if error_count > 0 {
			return Err(LoxError::ParserErrors(error_count));
		}
		Ok(statements)
	}

	/// Parse a single expression that must span the whole token stream.
	pub fn parse_expression(mut self, diagnostics: &mut Diagnostics) -> Result<Expression, LoxError> {
		let result = self.expression().and_then(|expression| {
			if self.is_at_end() {
				Ok(expression)
			} else {
				Err(ParseError::new(self.peek(), ParseErrorType::TrailingTokens).into())
			}
		});
		match result {
			Ok(expression) => Ok(*expression),
			Err(ParserError::ParseError(e)) => {
				diagnostics.report(&e);
				Err(LoxError::ParserErrors(1))
			}
			Err(ParserError::InternalError(e)) => Err(e.into()),
		}
	}

	fn declaration(&mut self) -> Result<Statement, ParserError> {
		if self.match_tokens(&[Var]) {
			return self.var_declaration();
		}
		self.statement()
	}

	fn var_declaration(&mut self) -> Result<Statement, ParserError> {
		if !self.check(&Identifier) {
			return Err(ParseError::new(self.peek(), ParseErrorType::ExpectedVariableName).into());
		}
		let name_token = self.advance();

		let initializer = if self.match_tokens(&[Equal]) { Some(*self.expression()?) } else { None };

		self.consume(&Semicolon, ParseErrorType::Expected("Expect ';' after variable declaration."))?;
		Ok(Statement::VarDeclaration { name_token, initializer })
	}

	fn statement(&mut self) -> Result<Statement, ParserError> {
		if self.match_tokens(&[Print]) {
			return self.print_statement();
		}
		self.expression_statement()
	}

	fn print_statement(&mut self) -> Result<Statement, ParserError> {
		let value = self.expression()?;
		self.consume(&Semicolon, ParseErrorType::Expected("Expect ';' after value."))?;
		Ok(Statement::Print(*value))
	}

	fn expression_statement(&mut self) -> Result<Statement, ParserError> {
		let expression = self.expression()?;
		self.consume(&Semicolon, ParseErrorType::Expected("Expect ';' after expression."))?;
		Ok(Statement::Expression(*expression))
	}

	fn expression(&mut self) -> Result<Box<Expression>, ParserError> { self.equality() }

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.comparison()?;
		while self.match_tokens(&[BangEqual, EqualEqual]) {
			let operator = self.previous().clone();
			expression = Expression::binary(expression, operator, self.comparison()?)
		}
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.term()?;
		while self.match_tokens(&[Greater, GreaterEqual, Less, LessEqual]) {
			let operator = self.previous().clone();
			expression = Expression::binary(expression, operator, self.term()?)
		}
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.factor()?;
		while self.match_tokens(&[Minus, Plus]) {
			let operator = self.previous().clone();
			expression = Expression::binary(expression, operator, self.factor()?)
		}
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.unary()?;
		while self.match_tokens(&[Slash, Star]) {
			let operator = self.previous().clone();
			expression = Expression::binary(expression, operator, self.unary()?)
		}
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Box<Expression>, ParserError> {
		if self.match_tokens(&[Bang, Minus]) {
			let operator = self.previous().clone();
			return Ok(Expression::unary(operator, self.nested(Self::unary)?));
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Box<Expression>, ParserError> {
		match &self.peek().r#type {
			False | True | Nil | NumberLiteral(_) | StringLiteral(_) => {
				let token = self.advance();
				Ok(Box::new(token.try_into()?))
			}
			LeftParen => {
				self.advance(); // consume '('
				let expr = self.nested(Self::expression)?;
				self.consume(&RightParen, ParseErrorType::UnterminatedParenthesis)?;
				Ok(Expression::grouping(expr))
			}
			_ => Err(ParseError::new(self.peek(), ParseErrorType::ExpectedExpression).into()),
		}
	}

	/// Run `rule` one nesting level deeper, failing once [`MAX_NESTING`] is
	/// reached. The error points at the token that opened the level.
	fn nested(
		&mut self,
		rule: impl FnOnce(&mut Self) -> Result<Box<Expression>, ParserError>,
	) -> Result<Box<Expression>, ParserError> {
		if self.depth >= MAX_NESTING {
			return Err(ParseError::new(self.previous(), ParseErrorType::TooDeep).into());
		}
		self.depth += 1;
		let result = rule(self);
		self.depth -= 1;
		result
	}

	/// Consume the current token if it has the given type, fail otherwise.
	fn consume(&mut self, token_type: &TokenType, error: ParseErrorType) -> Result<Token, ParserError> {
		if self.check(token_type) {
			return Ok(self.advance());
		}
		Err(ParseError::new(self.peek(), error).into())
	}

	fn match_tokens(&mut self, types: &[TokenType]) -> bool {
		for token_type in types {
			if self.check(token_type) {
				self.advance();
				return true;
			}
		}
		false
	}

	fn check(&self, token_type: &TokenType) -> bool {
		if self.is_at_end() {
			return false;
		}

		&self.peek().r#type == token_type
	}

	/// Advance to the next token, returning the consumed one.
	fn advance(&mut self) -> Token {
		if !self.is_at_end() {
			self.current += 1;
		}
		self.previous().clone()
	}

	fn is_at_end(&self) -> bool { self.peek().is_eof() }

	fn peek(&self) -> &Token { &self.tokens[self.current] }

	fn previous(&self) -> &Token { &self.tokens[self.current.saturating_sub(1)] }

	/// Discard tokens until the start of the next statement.
	fn synchronize(&mut self) {
		self.advance();
		while !self.is_at_end() {
			if self.previous().r#type == Semicolon || self.peek().r#type.starts_statement() {
				return;
			}
			self.advance();
		}
	}
}
