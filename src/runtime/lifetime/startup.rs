//! Startup wiring shared by the CLI and the TUI

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::client::{HttpApi, ShortenerApi};
use crate::config::StaticConfig;
use crate::dashboard::{Dashboard, DashboardSettings};
use crate::errors::Result;
use crate::session::{FileSessionStore, Session};
use crate::views::TruncateLimits;

/// Everything a front end needs, built once from [`StaticConfig`]
#[derive(Clone)]
pub struct ClientContext {
    pub config: Arc<StaticConfig>,
    pub api: Arc<dyn ShortenerApi>,
    pub session: Session,
    pub settings: DashboardSettings,
}

impl ClientContext {
    /// Assemble from explicit parts
    pub fn new(config: Arc<StaticConfig>, api: Arc<dyn ShortenerApi>, session: Session) -> Self {
        let settings = DashboardSettings::from_config(&config);
        Self {
            config,
            api,
            session,
            settings,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(
            Arc::clone(&self.api),
            self.session.clone(),
            self.settings.clone(),
        )
    }

    pub fn truncate_limits(&self) -> TruncateLimits {
        TruncateLimits {
            wide: self.config.ui.url_truncate_wide,
            narrow: self.config.ui.url_truncate_narrow,
        }
    }
}

/// Build the HTTP client and read the persisted session
pub fn prepare_client(config: Arc<StaticConfig>) -> Result<ClientContext> {
    let api = HttpApi::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs.max(1)),
    );
    debug!("Using {} API at {}", api.name(), api.base_url());

    let store = FileSessionStore::new(&config.session.dir, &config.session.key);
    debug!("Session file: {}", store.path().display());
    let session = Session::init(Arc::new(store))?;

    Ok(ClientContext::new(config, Arc::new(api), session))
}
