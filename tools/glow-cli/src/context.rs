//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use glow_cache::{Cache, FileStore};
use glow_commerce::catalog::Catalog;
use glow_commerce::Storefront;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => {
                            tracing::debug!(path = %config_path.display(), "Loaded config");
                            return Some(config);
                        }
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "Skipping config")
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

    /// Directory holding the persisted cart.
    pub fn data_dir(&self) -> PathBuf {
        self.config.storage.data_dir()
    }

    /// Open the storefront over the persisted cart.
    pub fn storefront(&self) -> Result<Storefront<FileStore>> {
        let dir = self.data_dir();
        let cache = Cache::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        self.output.debug(&format!("Cart data: {}", dir.display()));
        Ok(Storefront::new(self.config.store(), Catalog::demo(), cache))
    }
}
