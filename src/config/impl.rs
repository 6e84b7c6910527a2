use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

fn slot() -> &'static ArcSwap<StaticConfig> {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
}

/// Get the global configuration instance
///
/// Cheap to clone, holds no lock. Before initialization this is the
/// built-in defaults.
pub fn get_config() -> Arc<StaticConfig> {
    slot().load_full()
}

/// Load `config.toml` + env into the global slot
pub fn init_config() -> Result<Arc<StaticConfig>> {
    init_config_from(None)
}

/// Load from an explicit path (`-c/--config`) or the default location
pub fn init_config_from(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    let config = Arc::new(StaticConfig::load(path)?);
    slot().store(Arc::clone(&config));
    Ok(config)
}
