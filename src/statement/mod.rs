//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. A program is an ordered sequence of statements.

use std::fmt::Display;

use crate::{parser::expression::Expression, scanner::Token};

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// An expression evaluated for its side effects, the value is discarded.
	Expression(Expression),
	/// A print statement.
	Print(Expression),
	/// A variable declaration statement.
	VarDeclaration {
		/// The token of the variable being declared.
		name_token:  Token,
		/// An optional initializer expression.
		initializer: Option<Expression>,
	},
}

impl Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Expression(expression) => write!(f, "(; {expression})"),
			Statement::Print(expression) => write!(f, "(print {expression})"),
			Statement::VarDeclaration { name_token, initializer: Some(initializer) } => {
				write!(f, "(var {} {initializer})", name_token.lexeme)
			}
			Statement::VarDeclaration { name_token, initializer: None } => write!(f, "(var {})", name_token.lexeme),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{Diagnostics, parser::Parser, scanner::Scanner, statement::Statement};

	fn parse(input: &str) -> Vec<Statement> {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(input).scan_tokens(&mut diagnostics).unwrap();
		Parser::new(tokens).parse(&mut diagnostics).unwrap()
	}

	/// Helper function to parse a string into statements and return the count
	fn parse_statement_count(input: &str) -> usize { parse(input).len() }

	/// Helper function to parse a string and check if the first statement matches
	/// expected type
	fn parse_statement_type(input: &str, expected_type: &str) -> bool {
		let statements = parse(input);

		match expected_type {
			"print" => matches!(statements[0], Statement::Print(_)),
			"expression" => matches!(statements[0], Statement::Expression(_)),
			"var" => matches!(statements[0], Statement::VarDeclaration { .. }),
			_ => false,
		}
	}

	/// Helper function to parse a variable declaration and check its properties
	fn parse_var_declaration(input: &str, name: &str, has_initializer: bool) -> bool {
		match &parse(input)[0] {
			Statement::VarDeclaration { name_token, initializer } => {
				name_token.lexeme == name && initializer.is_some() == has_initializer
			}
			_ => false,
		}
	}

	#[test]
	fn test_expression_statement() {
		assert_eq!(parse_statement_count("123;"), 1);
		assert_eq!(parse_statement_count("1 + 2;"), 1);
		assert_eq!(parse_statement_count("1 + 2; 3 + 4;"), 2);
		assert!(parse_statement_type("123;", "expression"));
		assert!(parse_statement_type("\"a\" + \"b\";", "expression"));
	}

	#[test]
	fn test_print_statement() {
		assert_eq!(parse_statement_count("print 123;"), 1);
		assert_eq!(parse_statement_count("print 1 + 2;"), 1);
		assert_eq!(parse_statement_count("print 123; print 456;"), 2);
		assert!(parse_statement_type("print 123;", "print"));
		assert!(parse_statement_type("print 1 + 2;", "print"));
	}

	#[test]
	fn test_var_declaration() {
		assert_eq!(parse_statement_count("var x;"), 1);
		assert!(parse_statement_type("var x;", "var"));
		assert!(parse_var_declaration("var x;", "x", false));

		assert!(parse_var_declaration("var y = 42;", "y", true));
		assert!(parse_var_declaration("var z = 1 + 2 * 3;", "z", true));
	}

	#[test]
	fn test_mixed_statements() {
		let statements = parse("var x = 5; print 1; 2 + 1;");
		assert_eq!(statements.len(), 3);
		assert!(matches!(statements[0], Statement::VarDeclaration { .. }));
		assert!(matches!(statements[1], Statement::Print(_)));
		assert!(matches!(statements[2], Statement::Expression(_)));
	}

	#[test]
	fn test_display() {
		let rendered: Vec<String> = parse("print -1; 1 + 2; var a; var b = nil;").iter().map(|s| s.to_string()).collect();
		assert_eq!(rendered, vec!["(print (- 1))", "(; (+ 1 2))", "(var a)", "(var b nil)"]);
	}
}
