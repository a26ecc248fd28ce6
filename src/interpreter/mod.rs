//! Lox tree-walking interpreter.
//!
//! The interpreter walks the abstract syntax tree (AST) produced by the parser,
//! recursively evaluating each expression and computing its runtime value.
//! Operands are evaluated left to right and always both, there are no
//! short-circuit operators at this level of the grammar.
//!
//! # Expression Types
//!
//! - **Literals**: `nil`, booleans, numbers, strings
//! - **Unary**: `-` (negation), `!` (logical NOT)
//! - **Binary**: `+`, `-`, `*`, `/`, comparisons, equality
//! - **Grouping**: Parenthesized expressions

pub mod value;

use std::io::{Stdout, Write};

use Expression::*;
use anyhow::{Context, anyhow};
use value::Value;

use crate::{
	error::interpreter::{InterpreterError, RuntimeError, RuntimeErrorType},
	parser::expression::Expression,
	scanner::TokenType,
	statement::Statement,
};

/// Interpreter that executes Lox statements, writing `print` output to `W`.
pub struct Interpreter<W: Write = Stdout> {
	output: W,
}

impl Interpreter {
	pub fn new() -> Self { Self { output: std::io::stdout() } }
}

impl Default for Interpreter {
	fn default() -> Self { Self::new() }
}

impl<W: Write> Interpreter<W> {
	pub fn with_output(output: W) -> Self { Self { output } }

	pub fn into_output(self) -> W { self.output }

	/// Execute statements in order.
	///
	/// The first runtime error stops execution, the statements after it are not
	/// run.
	pub fn interpret(&mut self, statements: &[Statement]) -> Result<(), InterpreterError> {
		for statement in statements {
			self.execute(statement)?;
		}
		Ok(())
	}

	fn execute(&mut self, statement: &Statement) -> Result<(), InterpreterError> {
		match statement {
			Statement::Expression(expression) => {
				self.evaluate(expression)?;
			}
			Statement::Print(expression) => {
				let value = self.evaluate(expression)?;
				writeln!(self.output, "{value}").context("Failed write print output")?;
				self.output.flush().context("Failed flush print output")?;
			}
			Statement::VarDeclaration { name_token, initializer } => {
				if let Some(initializer) = initializer {
					self.evaluate(initializer)?;
				}
				return Err(RuntimeError::new(name_token, RuntimeErrorType::UnsupportedDeclaration).into());
			}
		}
		Ok(())
	}

	/// Evaluate the given expression and return its value.
	///
	/// Operands of the wrong type give a [`RuntimeError`], an operator token
	/// the parser could never have produced gives an internal error.
	pub fn evaluate(&self, expr: &Expression) -> Result<Value, InterpreterError> {
		Ok(match expr {
			Literal(lit) => lit.into(),
			Grouping(inner) => self.evaluate(inner)?,
			Unary { operator, right } => {
				let right_value = self.evaluate(right)?;
				match (&operator.r#type, &right_value) {
					(TokenType::Bang, v) => Value::Bool(!v.is_truthy()),
					(TokenType::Minus, Value::Num(n)) => Value::Num(-n),
					(TokenType::Minus, _) => {
						return Err(RuntimeError::new(operator, RuntimeErrorType::OperandMustBeNumber).into());
					}
					(other, _) => return Err(anyhow!("{other:?} is not a unary operator").into()),
				}
			}
			Binary { left, operator, right } => {
				let left_value = self.evaluate(left)?;
				let right_value = self.evaluate(right)?;
				left_value.binary_op(&operator.r#type, &right_value)?.ok_or_else(|| {
					let r#type = match operator.r#type {
						TokenType::Plus => RuntimeErrorType::OperandsMustBeNumbersOrStrings,
						_ => RuntimeErrorType::OperandsMustBeNumbers,
					};
					RuntimeError::new(operator, r#type)
				})?
			}
		})
	}
}
