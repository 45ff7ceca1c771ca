//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the [`Settings`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`LUAFILE__SETTINGS__TYPE=.lua`)
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use luafile_core::domain::{Extension, NamingConvention, Settings};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "LUAFILE";

/// Keys accepted by `config get` / `config set`.
pub const KNOWN_KEYS: &[&str] = &[
    "settings.type",
    "settings.knit",
    "settings.convention",
    "settings.strict_suffix",
    "editor.open",
    "editor.command",
    "workspace.roots",
    "output.no_color",
    "output.format",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Naming and template settings.
    pub settings: SettingsConfig,
    /// How created files are opened.
    pub editor: EditorConfig,
    /// Fallback target directories.
    pub workspace: WorkspaceConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// File extension including the leading dot.
    #[serde(rename = "type")]
    pub extension: Extension,
    /// Knit templates enabled.
    pub knit: bool,
    pub convention: NamingConvention,
    /// Require `Controller` / `Service` in typed names.
    pub strict_suffix: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            extension: settings.extension,
            knit: settings.companion_framework_enabled,
            convention: settings.convention,
            strict_suffix: settings.strict_role_suffix,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Open created files.
    pub open: bool,
    /// Editor command; `$VISUAL` then `$EDITOR` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            open: true,
            command: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Only the first root is used as a target.
    pub roots: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);

        let config = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to build default config")?,
            )
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// The [`Settings`] the core works with.
    pub fn settings(&self) -> Settings {
        Settings::default()
            .with_extension(self.settings.extension.clone())
            .with_companion_framework(self.settings.knit)
            .with_convention(self.settings.convention)
            .with_strict_role_suffix(self.settings.strict_suffix)
    }

    /// The file `--config` points at, or the default location.
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.luafile.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "luafile", "luafile")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".luafile.toml"))
    }

    /// Read the raw TOML table at `path` (empty when the file is missing).
    pub fn read_table(path: &Path) -> anyhow::Result<toml::Table> {
        if !path.exists() {
            return Ok(toml::Table::new());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        text.parse::<toml::Table>()
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
