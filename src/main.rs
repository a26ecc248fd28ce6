use std::process::ExitCode;

use palc::Parser;
use treelox::{LoxError, cli::*};

fn main() -> ExitCode {
	let mut loxer = treelox::Loxer::new();

	let result = match Cli::parse().mode {
		Mode::File { path } => loxer.run_file(&path),
		Mode::Repl => loxer.run_prompt(),
		Mode::Ast { source } => loxer.dump_ast(&source).map(|ast| print!("{ast}")),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			// Language errors were reported line by line already.
			if let LoxError::InternalError(_) = e {
				eprintln!("{e}");
			}
			ExitCode::from(e.exit_code())
		}
	}
}
