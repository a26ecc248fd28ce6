use std::fmt::Display;

use Value::*;
use anyhow::bail;

use crate::{parser::expression::LiteralValue, scanner::TokenType};

/// Value represents a runtime value in Lox.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Nil,
	Bool(bool),
	Num(f64),
	Str(String),
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Nil => write!(f, "nil"),
			Bool(b) => write!(f, "{b}"),
			Num(n) if n.is_nan() => write!(f, "NaN"),
			Num(n) if n.is_infinite() => write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" }),
			// `f64` display already drops the `.0` of integral values
			Num(n) => write!(f, "{n}"),
			Str(s) => write!(f, "{s}"),
		}
	}
}

impl From<&LiteralValue> for Value {
	fn from(literal: &LiteralValue) -> Self {
		match literal {
			LiteralValue::Nil => Nil,
			LiteralValue::Boolean(b) => Bool(*b),
			LiteralValue::Number(n) => Num(*n),
			LiteralValue::StringLiteral(s) => Str(s.clone()),
		}
	}
}

impl Value {
	/// Performs a binary operation between two values.
	///
	/// `None` means the operand types don't fit the operator. A token that is
	/// no binary operator at all is an internal error.
	pub fn binary_op(&self, op: &TokenType, right: &Self) -> anyhow::Result<Option<Value>> {
		use TokenType::*;

		let value = match op {
			Plus => self.plus(right),
			Minus => self.minus(right),
			Star => self.star(right),
			Slash => self.slash(right),
			Greater => self.greater(right).map(Bool),
			GreaterEqual => self.greater_equal(right).map(Bool),
			Less => self.less(right).map(Bool),
			LessEqual => self.less_equal(right).map(Bool),
			EqualEqual => Some(Bool(self.equal(right))),
			BangEqual => Some(Bool(!self.equal(right))),
			other => bail!("{other:?} is not a binary operator"),
		};
		Ok(value)
	}

	/// Only `nil` and `false` are falsy, zero and the empty string are truthy.
	pub fn is_truthy(&self) -> bool { !matches!(self, Nil | Bool(false)) }

	/// Tries to add two values together.
	pub fn plus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Num(l), Num(r)) => Some(Num(l + r)),
			(Str(l), Str(r)) => Some(Str(format!("{l}{r}"))),
			_ => None,
		}
	}

	/// Tries to subtract two values.
	pub fn minus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Num(l), Num(r)) => Some(Num(l - r)),
			_ => None,
		}
	}

	/// Tries to multiply two values together.
	pub fn star(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Num(l), Num(r)) => Some(Num(l * r)),
			_ => None,
		}
	}

	/// Tries to divide two values, division by zero follows IEEE-754.
	pub fn slash(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Num(l), Num(r)) => Some(Num(l / r)),
			_ => None,
		}
	}

	/// Tries to compare two values for greater-than.
	pub fn greater(&self, other: &Self) -> Option<bool> {
		match (self, other) {
			(Num(l), Num(r)) => Some(l > r),
			_ => None,
		}
	}

	/// Tries to compare two values for greater than or equal.
	pub fn greater_equal(&self, other: &Self) -> Option<bool> {
		match (self, other) {
			(Num(l), Num(r)) => Some(l >= r),
			_ => None,
		}
	}

	/// Tries to compare if self is less than other.
	pub fn less(&self, other: &Self) -> Option<bool> {
		match (self, other) {
			(Num(l), Num(r)) => Some(l < r),
			_ => None,
		}
	}

	/// Tries to compare if self is less than or equal to other.
	pub fn less_equal(&self, other: &Self) -> Option<bool> {
		match (self, other) {
			(Num(l), Num(r)) => Some(l <= r),
			_ => None,
		}
	}

	/// Equality never fails: values of different types are simply unequal.
	pub fn equal(&self, other: &Self) -> bool {
		match (self, other) {
			(Nil, Nil) => true,
			(Bool(l), Bool(r)) => l == r,
			(Num(l), Num(r)) => l == r,
			(Str(l), Str(r)) => l == r,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truthiness() {
		assert!(!Nil.is_truthy());
		assert!(!Bool(false).is_truthy());
		assert!(Bool(true).is_truthy());
		assert!(Num(0.0).is_truthy());
		assert!(Str(String::new()).is_truthy());
	}

	#[test]
	fn equality_without_coercion() {
		assert!(Nil.equal(&Nil));
		assert!(!Nil.equal(&Bool(false)));
		assert!(!Num(1.0).equal(&Str("1".into())));
		assert!(Str("a".into()).equal(&Str("a".into())));
		assert!(!Num(f64::NAN).equal(&Num(f64::NAN)));
		assert_eq!(Num(1.0).binary_op(&TokenType::BangEqual, &Str("1".into())).unwrap(), Some(Bool(true)));
	}

	#[test]
	fn binary_op_rejects_non_operators() {
		assert_eq!(Num(1.0).binary_op(&TokenType::Star, &Nil).unwrap(), None);
		let error = Num(1.0).binary_op(&TokenType::Comma, &Num(2.0)).unwrap_err();
		assert_eq!(error.to_string(), "Comma is not a binary operator");
		assert!(Bool(true).binary_op(&TokenType::Bang, &Bool(false)).is_err());
	}

	#[test]
	fn plus_requires_matching_types() {
		assert_eq!(Num(5.0).plus(&Str("hello".into())), None);
		assert_eq!(Str("a".into()).plus(&Str("b".into())), Some(Str("ab".into())));
		assert_eq!(Num(1.5).plus(&Num(2.0)), Some(Num(3.5)));
	}

	#[test]
	fn division_by_zero_is_ieee() {
		assert_eq!(Num(1.0).slash(&Num(0.0)), Some(Num(f64::INFINITY)));
		assert_eq!(Num(-1.0).slash(&Num(0.0)), Some(Num(f64::NEG_INFINITY)));
		assert!(matches!(Num(0.0).slash(&Num(0.0)), Some(Num(n)) if n.is_nan()));
	}

	#[test]
	fn display() {
		assert_eq!(Nil.to_string(), "nil");
		assert_eq!(Bool(true).to_string(), "true");
		assert_eq!(Num(5.0).to_string(), "5");
		assert_eq!(Num(-0.0).to_string(), "-0");
		assert_eq!(Num(2.5).to_string(), "2.5");
		assert_eq!(Num(0.1 + 0.2).to_string(), "0.30000000000000004");
		assert_eq!(Num(f64::INFINITY).to_string(), "Infinity");
		assert_eq!(Num(f64::NEG_INFINITY).to_string(), "-Infinity");
		assert_eq!(Num(f64::NAN).to_string(), "NaN");
		assert_eq!(Str("hi there".into()).to_string(), "hi there");
	}
}
