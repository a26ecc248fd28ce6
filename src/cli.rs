use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "treelox", after_long_help = "A tree-walking interpreter for the Lox language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a script file
	File { path: PathBuf },
	/// Start the interactive prompt
	Repl,
	/// Print the syntax tree of the given source without running it
	Ast { source: String },
}
