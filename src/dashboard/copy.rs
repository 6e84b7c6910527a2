use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::errors::Result;

/// Default acknowledgment window
pub const COPY_ACK: Duration = Duration::from_millis(2000);

/// System clipboard seam
pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// Clipboard that only remembers the last text
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<String> {
        self.text.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        *self.text.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Which short code shows "copied", and until when.
///
/// Only one code is marked at a time; a newer copy replaces the mark.
#[derive(Debug, Clone)]
pub struct CopyTracker {
    window: Duration,
    marked: Option<(String, Instant)>,
}

impl Default for CopyTracker {
    fn default() -> Self {
        Self::new(COPY_ACK)
    }
}

impl CopyTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            marked: None,
        }
    }

    pub fn mark(&mut self, code: &str) {
        self.marked = Some((code.to_string(), Instant::now()));
    }

    pub fn is_copied(&self, code: &str) -> bool {
        self.copied_code() == Some(code)
    }

    /// Code still inside its window, if any
    pub fn copied_code(&self) -> Option<&str> {
        match &self.marked {
            Some((code, at)) if at.elapsed() < self.window => Some(code),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.marked = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_mark_expires_after_window_not_sooner() {
        let mut tracker = CopyTracker::new(Duration::from_secs(2));
        tracker.mark("abc");
        assert!(tracker.is_copied("abc"));

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(tracker.is_copied("abc"));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!tracker.is_copied("abc"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_code_is_marked() {
        let mut tracker = CopyTracker::default();
        tracker.mark("a");
        tracker.mark("b");
        assert!(!tracker.is_copied("a"));
        assert!(tracker.is_copied("b"));
        tracker.clear();
        assert_eq!(tracker.copied_code(), None);
    }

    #[test]
    fn test_memory_clipboard() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_text("http://localhost:3061/abc").unwrap();
        assert_eq!(clipboard.text().as_deref(), Some("http://localhost:3061/abc"));
    }
}
