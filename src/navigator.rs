//! Full-page navigation targets
//!
//! The miner hands the resolved destination to a [`Navigator`]. The CLI
//! opens the system browser; tests record the calls.

use std::process::{Command, Stdio};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::errors::{Result, TrustMeBroError};

pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str) -> Result<()>;
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, url: &str) -> Result<()> {
        (**self).navigate(url)
    }
}

/// Opens URLs with the platform opener
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNavigator;

impl SystemNavigator {
    fn command(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&self, url: &str) -> Result<()> {
        info!("Redirecting to {}", url);
        Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| {
                warn!("Failed to launch browser for {}: {}", url, e);
                TrustMeBroError::file_operation(format!("Failed to open browser: {}", e))
            })
    }
}

/// Keeps every URL it was asked to open
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.visited.lock().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<()> {
        self.visited.lock().push(url.to_string());
        Ok(())
    }
}
