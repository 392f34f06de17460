//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Clipboard context opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Some backends hand back a copy; wipe it.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::Clipboard;
    use crate::error::{Error, Result};

    /// Records copies; `broken` simulates a missing clipboard.
    #[derive(Default)]
    pub struct FakeClipboard {
        pub contents: Option<String>,
        pub broken: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            if self.broken {
                return Err(Error::Clipboard("no display".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }
}
