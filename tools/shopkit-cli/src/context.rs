//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::config::ShopConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shopkit.toml", ".shopkit.toml", "shopkit.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Shop configuration.
    pub config: ShopConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or discover one.
    ///
    /// Falls back to the built-in sample catalog when nothing is found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            ShopConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<ShopConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match ShopConfig::load(config_path.to_str()?) {
                        Ok(config) => {
                            debug!(path = %config_path.display(), "loaded config");
                            return Some(config);
                        }
                        Err(e) => {
                            debug!(path = %config_path.display(), error = %e, "skipping config");
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
