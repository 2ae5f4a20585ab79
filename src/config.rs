//! Configuration module for the resource indexer.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `RD_` and use double underscores
//! to separate nested levels:
//! - `RD_SCAN__PARALLEL_THREADS=8` sets `scan.parallel_threads`
//! - `RD_SCAN__SKIP_UNCHANGED=false` sets `scan.skip_unchanged`
//! - `RD_FRAMEWORK__RES_DIR=/opt/android/res` sets `framework.res_dir`

use crate::indexing::walker::IGNORE_FILE_NAME;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the settings file
pub const CONFIG_DIR: &str = ".resdex";

const ENV_PREFIX: &str = "RD_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .resdex is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Scanning configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Platform resources
    #[serde(default)]
    pub framework: FrameworkConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanConfig {
    /// Number of threads used to read and parse files
    #[serde(default = "default_parallel_threads")]
    pub parallel_threads: usize,

    /// Follow symbolic links inside the resource directory
    #[serde(default = "default_false")]
    pub follow_links: bool,

    /// Skip dot-files and dot-directories
    #[serde(default = "default_true")]
    pub ignore_hidden: bool,

    /// Skip files whose content hash did not change since the last pass
    #[serde(default = "default_true")]
    pub skip_unchanged: bool,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct FrameworkConfig {
    /// `res/` directory of the platform, scanned with the framework flag set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_dir: Option<PathBuf>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_parallel_threads() -> usize {
    num_cpus::get()
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            debug: false,
            scan: ScanConfig::default(),
            framework: FrameworkConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parallel_threads: default_parallel_threads(),
            follow_links: false,
            ignore_hidden: true,
            skip_unchanged: true,
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join("settings.toml"));

        Self::figment(config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref().to_path_buf())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: PathBuf) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscore
            // stays inside field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find the settings file by looking for .resdex from the current
    /// directory up to the root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join("settings.toml"))
    }

    /// Get the workspace root directory (where .resdex is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Check if configuration is properly initialized
    pub fn check_init() -> Result<(), String> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join("settings.toml"));

        if !config_path.exists() {
            return Err("No configuration file found".to_string());
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                if let Err(e) = toml::from_str::<Settings>(&content) {
                    return Err(format!(
                        "Configuration file is corrupted: {e}\nRun 'resdex init --force' to regenerate."
                    ));
                }
            }
            Err(e) => {
                return Err(format!("Cannot read configuration file: {e}"));
            }
        }

        Ok(())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file with comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        Self::init_config_file_in(Path::new("."), force)
    }

    /// Same as [`Settings::init_config_file`], rooted at `root`
    pub fn init_config_file_in(root: &Path, force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = root.join(CONFIG_DIR).join("settings.toml");

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = format!(
            r#"# resdex configuration file

# Version of the configuration schema
version = 1

# Global debug mode
debug = false

[scan]
# Number of threads used to read and parse files (defaults to CPU count)
# parallel_threads = {}

# Follow symbolic links inside resource directories
follow_links = false

# Skip dot-files and dot-directories
ignore_hidden = true

# Skip files whose content did not change since the previous refresh
skip_unchanged = true

[framework]
# Platform resources, registered with the framework flag set
# res_dir = "/path/to/android-sdk/platforms/android-34/data/res"
"#,
            default_parallel_threads()
        );

        std::fs::write(&config_path, template)?;
        Self::create_default_ignore_file(root, force)?;

        Ok(config_path)
    }

    fn create_default_ignore_file(root: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
        let ignore_path = root.join(IGNORE_FILE_NAME);

        if !force && ignore_path.exists() {
            return Ok(());
        }

        let default_content = r#"# resdex ignore patterns (gitignore syntax)
# Files and folders listed here are never registered as resources.

# Editor and OS leftovers
*.swp
*.swo
*~
*.bak
*.tmp
.DS_Store
Thumbs.db

# Build output that sometimes lands next to resources
build/
generated/
"#;

        std::fs::write(&ignore_path, default_content)?;
        Ok(())
    }
}
