/// Configuration loading and access helpers
use super::schemas::Config;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::RwLock;

/// Global configuration instance
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Environment variable overriding `rpc.url`
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Read a config file, falling back to defaults when it does not exist
pub fn read_config_file(path: &Path) -> Result<Config, String> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

    toml::from_str::<Config>(&contents)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
}

/// Apply a non-empty RPC URL override
pub fn apply_rpc_url_override(config: &mut Config, url: Option<&str>) {
    if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
        config.rpc.url = url.to_string();
    }
}

/// Load the config file, apply `RPC_URL` and install the global CONFIG
pub fn load_config_from_path(path: &Path) -> Result<(), String> {
    let mut config = read_config_file(path)?;
    apply_rpc_url_override(&mut config, std::env::var(RPC_URL_ENV).ok().as_deref());

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| "Config already initialized".to_string())
}

/// Run `f` with read access to the configuration.
/// Falls back to defaults if no config was loaded.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    match CONFIG.get() {
        Some(lock) => match lock.read() {
            Ok(config) => f(&config),
            Err(poisoned) => f(&poisoned.into_inner()),
        },
        None => f(&Config::default()),
    }
}

/// Replace the RPC URL of the loaded configuration
pub fn set_rpc_url(url: &str) -> Result<(), String> {
    let lock = CONFIG
        .get()
        .ok_or_else(|| "Config not initialized. Call load_config_from_path() first.".to_string())?;
    let mut config = lock
        .write()
        .map_err(|e| format!("Failed to acquire config write lock: {}", e))?;
    apply_rpc_url_override(&mut config, Some(url));
    Ok(())
}
