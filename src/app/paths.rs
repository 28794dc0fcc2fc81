// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--cache-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`OVERTURE_CACHE_DIR`, `OVERTURE_CONFIG_DIR`)
//! 4. **Platform default** - via the `dirs` crate
//!
//! CLI overrides should be initialized once at startup, before any path
//! resolution functions are called.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Overture";

/// Environment variable to override the clip cache directory.
pub const ENV_CACHE_DIR: &str = "OVERTURE_CACHE_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "OVERTURE_CONFIG_DIR";

/// Global CLI override for the cache directory (set once at startup).
static CLI_CACHE_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for cache and config directories.
///
/// # Panics
///
/// Panics if called more than once (`OnceLock` can only be set once).
pub fn init_cli_overrides(cache_dir: Option<String>, config_dir: Option<String>) {
    CLI_CACHE_DIR
        .set(cache_dir.map(PathBuf::from))
        .expect("CLI cache dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn get_cli_cache_dir() -> Option<PathBuf> {
    CLI_CACHE_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the directory where downloaded clips are cached.
///
/// Returns `None` if the cache directory cannot be determined (rare edge case).
pub fn get_app_cache_dir() -> Option<PathBuf> {
    get_app_cache_dir_with_override(None)
}

/// Returns the clip cache directory with an optional override.
///
/// The `override_path` parameter takes highest priority; it exists for tests.
pub fn get_app_cache_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_cache_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CACHE_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::cache_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding `settings.toml`.
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory with an optional override.
///
/// The `override_path` parameter takes highest priority; it exists for tests.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_cache_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CACHE_DIR);

        if let Some(path) = get_app_cache_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "cache dir should contain app name"
            );
        }
        // If dirs::cache_dir() returns None (rare), the test passes silently
    }

    #[test]
    fn app_config_dir_is_absolute() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.is_absolute(), "config dir should be absolute path");
        }
    }

    #[test]
    fn override_path_takes_precedence_for_cache_dir() {
        let override_path = PathBuf::from("/custom/cache/path");
        let result = get_app_cache_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CACHE_DIR, "");

        if let Some(path) = get_app_cache_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CACHE_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));

        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
