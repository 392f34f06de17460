use super::app::{App, Status};
use crate::clipboard::Clipboard;
use crate::history::{HISTORY_LIMIT, HistoryStore};
use crate::pass::CharClass;
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, clear, flush, label_color, print_rule, strength_bar,
};

fn check(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn history_key(index: usize) -> char {
    if index == 9 { '0' } else { (b'1' + index as u8) as char }
}

pub fn render<S: HistoryStore, C: Clipboard>(app: &App<S, C>) {
    clear();
    if app.show_help {
        print_help();
        return;
    }

    let config = &app.settings.config;
    let alphabet: usize = config
        .classes()
        .iter()
        .map(|c| c.alphabet(config.exclude_ambiguous).len())
        .sum();

    box_top("Passforge");
    box_line(&format!(
        "Length: {BOLD}{}{RESET}  (~{:.0} bits over {} chars)",
        config.length,
        calculate_entropy(config.length, alphabet),
        alphabet,
    ));
    box_line(&format!(
        "{} (u)ppercase  {} (l)owercase  {} (d)igits  {} (s)ymbols",
        check(config.is_enabled(CharClass::Upper)),
        check(config.is_enabled(CharClass::Lower)),
        check(config.is_enabled(CharClass::Digits)),
        check(config.is_enabled(CharClass::Symbols)),
    ));
    box_line(&format!(
        "{} (a) exclude ambiguous   {} (m)ask password",
        check(config.exclude_ambiguous),
        check(app.settings.masked),
    ));
    print_rule();

    match app.display_password() {
        Some(p) => box_line_center(&format!("{BOLD}{p}{RESET}")),
        None => box_line_center(&format!("{DIM}no password{RESET}")),
    }
    box_line_center(&strength_bar(&app.strength()));

    match &app.status {
        Some(Status::Info(msg)) => box_line(&format!("{GREEN}{msg}{RESET}")),
        Some(Status::Error(msg)) => box_line(&format!("{RED}{msg}{RESET}")),
        None => box_line(""),
    }
    box_bottom();

    box_top(&format!("History ({}/{})", app.history.len(), HISTORY_LIMIT));
    if app.history.is_empty() {
        box_line(&format!("{DIM}No passwords yet.{RESET}"));
    }
    for (i, entry) in app.history.entries().iter().enumerate() {
        let label = crate::pass::estimate(entry).label;
        let shown = if app.settings.masked {
            "\u{2022}".repeat(entry.chars().count())
        } else {
            entry.clone()
        };
        box_line(&format!(
            "{}) {}  {}{}{RESET}",
            history_key(i),
            shown,
            label_color(label),
            label
        ));
    }
    box_bottom();

    println!("{DIM}enter generate  c copy  +/- length  n set length  x clear history  w save  ? help  q quit{RESET}");
    flush();
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Password generator with strength scoring");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments on a terminal.");
    box_line("  2) Client: `passforge generate|estimate|history ...`.");
    box_line("");
    box_line("KEYS:");
    box_opt("  Enter, g", "Generate a password with the current options");
    box_opt("  c", "Copy the current password to the clipboard");
    box_opt("  u / l / d / s", "Toggle uppercase, lowercase, digits, symbols");
    box_opt("  a", "Toggle exclusion of O 0 I l 1 | ` ' \" \\");
    box_opt("  m", "Mask the password on screen");
    box_opt("  + / -", "Length up or down by one");
    box_opt("  n", "Type a new length");
    box_opt("  1-9, 0", "Reuse history entry 1-10");
    box_opt("  x", "Clear history");
    box_opt("  w", "Save current options as defaults");
    box_opt("  q, Esc", "Quit");
    box_line("");
    box_line("STRENGTH:");
    box_line("  +1 each for length >= 8, 12, 16, 24; +1 per character type");
    box_line("  present. A single repeated character scores 0; a run of 3");
    box_line("  identical characters costs 1.");
    box_bottom();
    println!("{DIM}press enter to return{RESET}");
    flush();
}
