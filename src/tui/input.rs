use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use super::app::Action;
use crate::pass::CharClass;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Map a key press to a screen action. Ctrl-C is handled by the caller.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let action = match key.code {
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('m') => Action::ToggleMask,
        KeyCode::Char('u') => Action::Toggle(CharClass::Upper),
        KeyCode::Char('l') => Action::Toggle(CharClass::Lower),
        KeyCode::Char('d') => Action::Toggle(CharClass::Digits),
        KeyCode::Char('s') => Action::Toggle(CharClass::Symbols),
        KeyCode::Char('a') => Action::ToggleAmbiguous,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Action::Longer,
        KeyCode::Char('-') | KeyCode::Left => Action::Shorter,
        KeyCode::Char('n') => Action::EnterLength,
        KeyCode::Char('0') => Action::UseHistory(9),
        KeyCode::Char(c @ '1'..='9') => Action::UseHistory(c as usize - '1' as usize),
        KeyCode::Char('x') => Action::ClearHistory,
        KeyCode::Char('w') => Action::Save,
        KeyCode::Char('?') | KeyCode::Char('h') => Action::Help,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Block until a mapped key is pressed.
pub fn read_action() -> Action {
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Action::Quit,
    };

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    // process::exit skips destructors
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                if let Some(action) = action_for(&key) {
                    return action;
                }
            }
            Ok(_) => {}
            Err(_) => return Action::Quit,
        }
    }
}

/// Get numeric input with cursor movement. `None` when cancelled.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut digits = initial_value.to_string();
    let mut cursor_pos = digits.len() + 1; // 1-based: 1 = before first digit
    let mut cancelled = false;

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return None,
    };
    guard.show_cursor();

    print!("{}: {}", prompt, digits);
    flush();
    let mut last_len = digits.len();

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        digits.clear();
                        cursor_pos = 1;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace if cursor_pos > 1 => {
                        cursor_pos -= 1;
                        digits.remove(cursor_pos - 1);
                    }
                    KeyCode::Delete if cursor_pos <= digits.len() => {
                        digits.remove(cursor_pos - 1);
                    }
                    KeyCode::Left if cursor_pos > 1 => cursor_pos -= 1,
                    KeyCode::Right if cursor_pos <= digits.len() => cursor_pos += 1,
                    KeyCode::Home => cursor_pos = 1,
                    KeyCode::End => cursor_pos = digits.len() + 1,
                    KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < 6 => {
                        digits.insert(cursor_pos - 1, c);
                        cursor_pos += 1;
                    }
                    _ => {}
                }

                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, digits);
                print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
                flush();
                last_len = digits.len();
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }

    drop(guard);
    println!();

    if cancelled { None } else { digits.parse().ok() }
}
