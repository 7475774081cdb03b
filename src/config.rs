//! Configuration handling for the playground

use crate::state::{DelayPolicy, Page};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_DELAY_MS: u64 = 2000;
const DEFAULT_JITTER_MS: u64 = 1000;

/// User configuration for the playground
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlaygroundConfig {
    /// Simulated latency of dynamic content, in milliseconds
    pub dynamic_delay_ms: Option<u64>,
    /// Add a random extra wait on top of the base delay
    pub randomize_delay: Option<bool>,
    /// Upper bound of the random extra wait
    pub delay_jitter_ms: Option<u64>,
    /// Replacement for the bundled API fixture
    pub fixture_path: Option<PathBuf>,
    /// Route to open on startup
    pub start_page: Option<String>,
}

impl PlaygroundConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "qa-playground", "qa-playground")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Write the defaults on first launch so there is a file to edit
    pub fn ensure_exists(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) if !path.exists() => {
                tracing::info!("Writing default config to {}", path.display());
                self.save()
            }
            _ => Ok(()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlaygroundConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Delay policy for every dynamic content controller
    pub fn delay_policy(&self) -> DelayPolicy {
        let base = Duration::from_millis(self.dynamic_delay_ms.unwrap_or(DEFAULT_DELAY_MS));
        if self.randomize_delay.unwrap_or(false) {
            let jitter = Duration::from_millis(self.delay_jitter_ms.unwrap_or(DEFAULT_JITTER_MS));
            DelayPolicy::Randomized {
                min: base,
                max: base + jitter,
            }
        } else {
            DelayPolicy::Fixed(base)
        }
    }

    /// Start page; an unknown route falls back to home
    pub fn start_page(&self) -> Page {
        match self.start_page.as_deref().map(Page::from_route) {
            Some(Ok(page)) => page,
            Some(Err(e)) => {
                tracing::warn!("Ignoring start_page: {e}");
                Page::Home
            }
            None => Page::Home,
        }
    }
}
