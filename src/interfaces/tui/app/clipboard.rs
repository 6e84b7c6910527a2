//! System clipboard via arboard

use parking_lot::Mutex;

use crate::dashboard::Clipboard;
use crate::errors::{Result, TrustMeBroError};

/// Keeps the arboard handle alive; on X11 the content is lost once it drops
pub struct SystemClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn open() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| TrustMeBroError::terminal(format!("Clipboard unavailable: {}", e)))?;
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        self.inner
            .lock()
            .set_text(text)
            .map_err(|e| TrustMeBroError::terminal(format!("Failed to copy: {}", e)))
    }
}
