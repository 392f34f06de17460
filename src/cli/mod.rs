//! Command-line interface.

mod context;
pub mod prompts;
pub mod quiet;

use clap::{Args as ClapArgs, Parser, Subcommand};

pub use context::run;

use crate::pass::MAX_LENGTH;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Suppress warnings and confirmations
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs the interactive screen when omitted on a terminal
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate passwords
    Generate(GenerateArgs),

    /// Score a password (reads a line from stdin if none given)
    Estimate {
        password: Option<String>,
    },

    /// Show or manage recently generated passwords
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// List entries, newest first
    List,
    /// Remove every entry
    Clear,
    /// Copy entry N to the clipboard
    Copy { number: usize },
    /// Print entry N
    Show { number: usize },
}

#[derive(ClapArgs, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Characters per password (at most 1024)
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Include uppercase letters
    #[arg(long, value_name = "BOOL")]
    pub upper: Option<bool>,

    /// Include lowercase letters
    #[arg(long, value_name = "BOOL")]
    pub lower: Option<bool>,

    /// Include digits
    #[arg(long, value_name = "BOOL")]
    pub digits: Option<bool>,

    /// Include symbols
    #[arg(long, value_name = "BOOL")]
    pub symbols: Option<bool>,

    /// Leave out O 0 I l 1 | ` ' " \
    #[arg(long, value_name = "BOOL")]
    pub exclude_ambiguous: Option<bool>,

    /// How many passwords to generate
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long)]
    pub clipboard: bool,

    /// Print the strength score next to each password
    #[arg(short, long)]
    pub strength: bool,

    /// Do not record the passwords in history
    #[arg(long)]
    pub no_history: bool,

    /// Store the resulting options as defaults
    #[arg(long)]
    pub save: bool,
}

impl GenerateArgs {
    /// Override loaded settings with explicit flags.
    pub fn apply(&self, settings: &mut Settings) {
        let c = &mut settings.config;
        if let Some(len) = self.length {
            c.length = len;
        }
        if let Some(v) = self.upper {
            c.upper = v;
        }
        if let Some(v) = self.lower {
            c.lower = v;
        }
        if let Some(v) = self.digits {
            c.digits = v;
        }
        if let Some(v) = self.symbols {
            c.symbols = v;
        }
        if let Some(v) = self.exclude_ambiguous {
            c.exclude_ambiguous = v;
        }
        if self.no_history {
            settings.keep_history = false;
        }
    }

    pub fn count(&self) -> usize {
        self.count.unwrap_or(1)
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let len: usize = s.parse().map_err(|e| format!("{e}"))?;
    if !(1..=MAX_LENGTH).contains(&len) {
        return Err(format!("must be between 1 and {MAX_LENGTH}"));
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let args = Args::try_parse_from(["passforge"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn generate_flags_override_settings() {
        let args = Args::try_parse_from([
            "passforge", "generate", "-l", "24", "--symbols", "false", "-n", "3", "--no-history",
        ])
        .unwrap();
        let Some(Command::Generate(g)) = args.command else {
            panic!("expected generate");
        };
        let mut settings = Settings::default();
        g.apply(&mut settings);
        assert_eq!(settings.config.length, 24);
        assert!(!settings.config.symbols);
        assert!(settings.config.upper);
        assert!(!settings.keep_history);
        assert_eq!(g.count(), 3);
    }

    #[test]
    fn length_outside_bounds_rejected() {
        for len in ["0", "1025", "2305843009213693952", "abc"] {
            assert!(
                Args::try_parse_from(["passforge", "generate", "-l", len]).is_err(),
                "accepted -l {len}"
            );
        }
        let args = Args::try_parse_from(["passforge", "generate", "-l", "1024"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Generate(GenerateArgs { length: Some(1024), .. }))
        ));
    }

    #[test]
    fn history_subcommands() {
        let args = Args::try_parse_from(["passforge", "history", "copy", "2"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::History { action: Some(HistoryAction::Copy { number: 2 }) })
        ));
        let args = Args::try_parse_from(["passforge", "-q", "history"]).unwrap();
        assert!(args.quiet);
        assert!(matches!(args.command, Some(Command::History { action: None })));
    }

    #[test]
    fn estimate_takes_optional_password() {
        let args = Args::try_parse_from(["passforge", "estimate", "hunter2"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Estimate { password: Some(ref p) }) if p == "hunter2"
        ));
    }
}
