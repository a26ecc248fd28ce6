//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 *
//! (45.67)` as nested nodes. Every node owns its children.

use Expression::*;
use LiteralValue::*;

use crate::scanner::{Token, TokenType};

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Literal(LiteralValue),
	Unary { operator: Token, right: Box<Expression> },
	Binary { left: Box<Expression>, operator: Token, right: Box<Expression> },
	Grouping(Box<Expression>),
}

impl Expression {
	pub fn unary(operator: Token, right: Box<Self>) -> Box<Self> { Box::new(Expression::Unary { operator, right }) }

	pub fn binary(left: Box<Self>, operator: Token, right: Box<Self>) -> Box<Self> {
		Box::new(Expression::Binary { left, operator, right })
	}

	pub fn grouping(expr: Box<Self>) -> Box<Self> { Box::new(Expression::Grouping(expr)) }

	pub fn literal(value: LiteralValue) -> Box<Self> { Box::new(Expression::Literal(value)) }

	/// Print the expression back as Lox source.
	///
	/// Groupings are kept in the tree, so no parentheses beyond them are needed:
	/// scanning and parsing the result gives back an equal tree.
	pub fn to_source(&self) -> String {
		match self {
			Literal(lit) => lit.to_string(),
			Unary { operator, right } => format!("{}{}", operator.lexeme, right.to_source()),
			Binary { left, operator, right } => {
				format!("{} {} {}", left.to_source(), operator.lexeme, right.to_source())
			}
			Grouping(expression) => format!("({})", expression.to_source()),
		}
	}
}

/// Literal values in the AST
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
	Number(f64),
	StringLiteral(String),
	Boolean(bool),
	Nil,
}

impl TryFrom<Token> for Expression {
	type Error = anyhow::Error;

	fn try_from(token: Token) -> Result<Self, Self::Error> {
		Ok(match token.r#type {
			TokenType::NumberLiteral(n) => Literal(Number(n)),
			TokenType::StringLiteral(s) => Literal(StringLiteral(s)),
			TokenType::True => Literal(Boolean(true)),
			TokenType::False => Literal(Boolean(false)),
			TokenType::Nil => Literal(Nil),
			_ => anyhow::bail!("Cannot convert token {:?} to Expression::Literal", token),
		})
	}
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(lit) => write!(f, "{lit}"),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Grouping(expression) => write!(f, "(group {expression})"),
		}
	}
}

impl std::fmt::Display for LiteralValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Number(n) => write!(f, "{n}"),
			StringLiteral(s) => write!(f, "\"{s}\""),
			Boolean(b) => write!(f, "{b}"),
			Nil => write!(f, "nil"),
		}
	}
}
