//! # How bare text turns into running code
//!
//! User's source code: `print (1 + 2) * 3;`

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `;`, numbers `123`,
//! string literals `"hi!"`, identifiers `min` are all tokens.
//!
//! Whitespaces and comments are ignored. So the tokens are
//! `["print", "(", "1", "+", "2", ")", "*", "3", ";"]`, followed by an end of
//! input marker.

//! ## Parsing
//!
//! A `parser` builds a tree structure of tokens, the `abstract syntax tree` or
//! `AST`. The `parser` also reports `syntax errors`.
//!
//! ``` markdown
//! print (Stmt.Print)
//! └── * (Expr.Binary)
//!     ├── group (Expr.Grouping)
//!     │   └── + (Expr.Binary)
//!     │       ├── 1 (Expr.Literal)
//!     │       └── 2 (Expr.Literal)
//!     └── 3 (Expr.Literal)
//! ```

//! ## Tree-walk interpreter
//!
//! Execute code right after parsing it to AST. Each node is evaluated after
//! its children, values are checked for their type at the moment an operator
//! needs them.

//! ## Errors
//!
//! Every stage records what went wrong into a [`Diagnostics`] owned by the
//! caller. Lexical and syntax errors stop the run before anything executes,
//! a runtime error stops the remaining statements.

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
mod loxer;
pub mod parser;
pub mod scanner;
pub mod statement;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{
	LoxError,
	interpreter::{InterpreterError, RuntimeError, RuntimeErrorType},
	parser::{ParseError, ParseErrorType},
	scanner::{ScanError, ScanErrorType},
};
pub use interpreter::{Interpreter, value::Value};
pub use loxer::Loxer;
pub use parser::{
	Parser,
	expression::{Expression, LiteralValue},
};
pub use scanner::{Scanner, Token, TokenType};
pub use statement::Statement;
