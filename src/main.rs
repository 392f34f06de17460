use std::process::ExitCode;

use clap::Parser;

mod cli;
mod clipboard;
mod error;
mod exits;
mod history;
mod logging;
mod pass;
mod rand;
mod settings;
mod terminal;
mod tui;

use cli::{Args, prompts, quiet};
use error::Error;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::harden_process();

    let args = Args::parse();
    logging::init(args.verbose);
    quiet::set(args.quiet);

    let result = match args.command {
        None if quiet::is_interactive() => tui::run(),
        _ => cli::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Config(e)) => {
            prompts::error(&e.to_string());
            ExitCode::from(2)
        }
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
