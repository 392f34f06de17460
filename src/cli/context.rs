//! CLI context - bundles settings, history and clipboard for one run.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use zeroize::Zeroize;

use super::{Args, Command, GenerateArgs, HistoryAction, prompts};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::Result;
use crate::history::{FileStore, History, HistoryStore, MemoryStore};
use crate::pass::{self, Password};
use crate::settings::Settings;

/// Run a non-interactive command. No subcommand means `generate`.
pub fn run(args: Args) -> Result<()> {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    let command = args
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut clipboard = SystemClipboard::new();

    match command {
        Command::Generate(flags) => {
            let mut settings = settings;
            flags.apply(&mut settings);
            if flags.save {
                settings.save_to_file()?;
                prompts::info("Settings saved.");
            }
            if settings.keep_history {
                let mut ctx = Context::open(settings, FileStore::default_location())?;
                ctx.generate(&flags, &mut clipboard, &mut out)
            } else {
                let mut ctx = Context::open(settings, MemoryStore::default())?;
                ctx.generate(&flags, &mut clipboard, &mut out)
            }
        }
        Command::Estimate { password } => {
            let mut password = match password {
                Some(p) => p,
                None => read_line(&mut io::stdin().lock())?,
            };
            let result = write_estimate(&password, &mut out);
            password.zeroize();
            result
        }
        Command::History { action } => {
            let mut ctx = Context::open(settings, FileStore::default_location())?;
            ctx.history(action.unwrap_or(HistoryAction::List), &mut clipboard, &mut out)
        }
    }
}

/// Settings plus the history they feed.
pub struct Context<S: HistoryStore> {
    pub settings: Settings,
    pub history: History<S>,
}

impl<S: HistoryStore> Context<S> {
    pub fn open(settings: Settings, store: S) -> Result<Self> {
        Ok(Self {
            settings,
            history: History::open(store)?,
        })
    }

    /// Generate `flags.count()` passwords, then print or copy them.
    pub fn generate(
        &mut self,
        flags: &GenerateArgs,
        clipboard: &mut impl Clipboard,
        out: &mut impl Write,
    ) -> Result<()> {
        let passwords = pass::generate_batch(&self.settings.config, flags.count())?;
        info!("generated {} password(s) of length {}", passwords.len(), self.settings.config.length);

        if self.settings.keep_history {
            for p in &passwords {
                if let Err(e) = self.history.push(p.as_str()) {
                    prompts::history_failed(&e.to_string());
                    break;
                }
            }
        }

        if flags.clipboard {
            let mut joined = passwords
                .iter()
                .map(Password::as_str)
                .collect::<Vec<_>>()
                .join("\n");
            let copied = clipboard.copy(&joined);
            joined.zeroize();
            match copied {
                Ok(()) => {
                    prompts::clipboard_copied(passwords.len());
                    return Ok(());
                }
                Err(e) => prompts::clipboard_fallback(&e.to_string()),
            }
        }

        for p in &passwords {
            if flags.strength {
                let s = pass::estimate(p.as_str());
                writeln!(out, "{}  {}/10 {}", p, s.score, s.label)?;
            } else {
                writeln!(out, "{}", p)?;
            }
        }
        Ok(())
    }

    pub fn history(
        &mut self,
        action: HistoryAction,
        clipboard: &mut impl Clipboard,
        out: &mut impl Write,
    ) -> Result<()> {
        debug!("history {:?} with {} entries", action, self.history.len());
        match action {
            HistoryAction::List => {
                if self.history.is_empty() {
                    prompts::info("No passwords yet.");
                }
                for (i, entry) in self.history.entries().iter().enumerate() {
                    let s = pass::estimate(entry);
                    writeln!(out, "{:>2}. {}  ({})", i + 1, entry, s.label)?;
                }
            }
            HistoryAction::Clear => {
                self.history.clear()?;
                prompts::info("History cleared.");
            }
            HistoryAction::Copy { number } => {
                clipboard.copy(self.history.nth(number)?)?;
                prompts::clipboard_copied(1);
            }
            HistoryAction::Show { number } => {
                writeln!(out, "{}", self.history.nth(number)?)?;
            }
        }
        Ok(())
    }
}

pub fn write_estimate(password: &str, out: &mut impl Write) -> Result<()> {
    let s = pass::estimate(password);
    writeln!(out, "{}/10 {}", s.score, s.label)?;
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::FakeClipboard;
    use crate::error::{ConfigError, Error};
    use crate::pass::GenerationConfig;

    fn context() -> Context<MemoryStore> {
        Context::open(Settings::default(), MemoryStore::default()).unwrap()
    }

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn generate_prints_and_records() {
        let mut ctx = context();
        let flags = GenerateArgs { count: Some(3), ..Default::default() };
        let mut out: Vec<u8> = Vec::new();
        ctx.generate(&flags, &mut FakeClipboard::default(), &mut out).unwrap();

        let printed = lines(&out);
        assert_eq!(printed.len(), 3);
        assert!(printed.iter().all(|p| p.chars().count() == 16));
        assert_eq!(ctx.history.len(), 3);
        // newest first
        assert_eq!(ctx.history.get(0), Some(printed[2].as_str()));
    }

    #[test]
    fn generate_with_strength_suffix() {
        let mut ctx = context();
        let flags = GenerateArgs { strength: true, ..Default::default() };
        let mut out: Vec<u8> = Vec::new();
        ctx.generate(&flags, &mut FakeClipboard::default(), &mut out).unwrap();
        let line = &lines(&out)[0];
        assert!(line.contains("/10 "), "{line}");
    }

    #[test]
    fn generate_rejects_bad_config() {
        let mut ctx = context();
        ctx.settings.config = GenerationConfig { length: 3, ..Default::default() };
        let err = ctx
            .generate(&GenerateArgs::default(), &mut FakeClipboard::default(), &mut io::sink())
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::BelowMinimum)));
        assert!(ctx.history.is_empty());
    }

    #[test]
    fn generate_survives_unusable_history_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::open(Settings::default(), FileStore::new(dir.path())).unwrap();
        let mut out: Vec<u8> = Vec::new();
        ctx.generate(&GenerateArgs::default(), &mut FakeClipboard::default(), &mut out)
            .unwrap();
        assert_eq!(lines(&out).len(), 1);
    }

    #[test]
    fn history_disabled_records_nothing() {
        let mut ctx = context();
        ctx.settings.keep_history = false;
        ctx.generate(&GenerateArgs::default(), &mut FakeClipboard::default(), &mut io::sink())
            .unwrap();
        assert!(ctx.history.is_empty());
    }

    #[test]
    fn clipboard_receives_password() {
        let mut ctx = context();
        let flags = GenerateArgs { clipboard: true, ..Default::default() };
        let mut clip = FakeClipboard::default();
        let mut out: Vec<u8> = Vec::new();
        ctx.generate(&flags, &mut clip, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(clip.contents.as_deref(), ctx.history.get(0));
    }

    #[test]
    fn clipboard_failure_falls_back_to_stdout() {
        let mut ctx = context();
        let flags = GenerateArgs { clipboard: true, ..Default::default() };
        let mut clip = FakeClipboard { broken: true, ..Default::default() };
        let mut out: Vec<u8> = Vec::new();
        ctx.generate(&flags, &mut clip, &mut out).unwrap();
        assert_eq!(lines(&out).len(), 1);
    }

    #[test]
    fn history_list_show_copy_clear() {
        let mut ctx = context();
        ctx.history.push("aaaaaaaa").unwrap();
        ctx.history.push("Ab3!Ab3!Ab3!Ab3!").unwrap();
        let mut clip = FakeClipboard::default();

        let mut out: Vec<u8> = Vec::new();
        ctx.history(HistoryAction::List, &mut clip, &mut out).unwrap();
        assert_eq!(
            lines(&out),
            vec![" 1. Ab3!Ab3!Ab3!Ab3!  (Strong)", " 2. aaaaaaaa  (Weak)"]
        );

        let mut out: Vec<u8> = Vec::new();
        ctx.history(HistoryAction::Show { number: 2 }, &mut clip, &mut out).unwrap();
        assert_eq!(lines(&out), vec!["aaaaaaaa"]);

        ctx.history(HistoryAction::Copy { number: 1 }, &mut clip, &mut io::sink()).unwrap();
        assert_eq!(clip.contents.as_deref(), Some("Ab3!Ab3!Ab3!Ab3!"));

        let missing = ctx.history(HistoryAction::Show { number: 5 }, &mut clip, &mut io::sink());
        assert!(matches!(missing, Err(Error::NoEntry(5))));

        ctx.history(HistoryAction::Clear, &mut clip, &mut io::sink()).unwrap();
        assert!(ctx.history.is_empty());
    }

    #[test]
    fn estimate_output() {
        let mut out: Vec<u8> = Vec::new();
        write_estimate("Ab3!Ab3!Ab3!Ab3!", &mut out).unwrap();
        write_estimate("", &mut out).unwrap();
        assert_eq!(lines(&out), vec!["7/10 Strong", "0/10 \u{2014}"]);
    }

    #[test]
    fn read_line_strips_newline_only() {
        let mut input = io::Cursor::new(b" pass word \r\nrest".to_vec());
        assert_eq!(read_line(&mut input).unwrap(), " pass word ");
    }
}
