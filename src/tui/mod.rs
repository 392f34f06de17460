//! Interactive TUI.

mod app;
mod input;
mod text;

use log::info;

use app::{Action, App, LoopAction};

use crate::clipboard::SystemClipboard;
use crate::error::Result;
use crate::history::{FileStore, History};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

/// Run TUI interactive mode.
pub fn run() -> Result<()> {
    reset_terminal();

    let settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            println!("Error loading settings: {}", e);
            Settings::default()
        }
    };
    let history = History::open(FileStore::default_location())?;
    let mut app = App::new(settings, history, SystemClipboard::new());
    info!("interactive session started");

    app.apply(Action::Generate);

    loop {
        text::render(&app);
        let action = input::read_action();

        if app.show_help {
            app.show_help = false;
            continue;
        }

        if action == Action::EnterLength {
            if let Some(len) = input::get_numeric_input("Length", app.settings.config.length) {
                app.set_length(len);
            }
            continue;
        }

        if let LoopAction::Break = app.apply(action) {
            break;
        }
    }

    clear();
    reset_terminal();
    Ok(())
}
