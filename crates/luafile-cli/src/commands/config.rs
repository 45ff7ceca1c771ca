//! `luafile config`: read and write configuration values.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::resolve_path(global.config.as_ref());

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn check_key(key: &str) -> CliResult<()> {
    if KNOWN_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(CliError::InvalidInput {
            message: format!(
                "Unknown config key '{key}'. Valid keys: {}",
                KNOWN_KEYS.join(", ")
            ),
            source: None,
        })
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Look up a dotted key in the effective configuration.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    check_key(key)?;

    let tree = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&tree, |node, part| node.get(part));

    Ok(match value {
        // Unset optionals such as `editor.command` are skipped on serialise
        None => String::new(),
        Some(toml::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    })
}

/// Typed value for `key` parsed from its command-line spelling.
fn parse_value(key: &str, raw: &str) -> CliResult<toml::Value> {
    match key {
        "settings.knit" | "settings.strict_suffix" | "editor.open" | "output.no_color" => raw
            .trim()
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|e| CliError::InvalidInput {
                message: format!("'{key}' expects true or false, got '{raw}'"),
                source: Some(Box::new(e)),
            }),
        "workspace.roots" => Ok(toml::Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| toml::Value::String(s.to_owned()))
                .collect(),
        )),
        _ => Ok(toml::Value::String(raw.to_owned())),
    }
}

/// Update `key` in the file at `path`, keeping every other entry.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    check_key(key)?;
    let value = parse_value(key, raw)?;

    let mut table = AppConfig::read_table(path)
        .with_cli_context(|| format!("Failed to load {}", path.display()))?;

    let (section, field) = key.split_once('.').ok_or_else(|| CliError::InvalidInput {
        message: format!("Config key '{key}' must be of the form section.field"),
        source: None,
    })?;

    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(section_table) = entry.as_table_mut() else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in {} is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_owned(), value);

    // Reject values the loader would refuse
    toml::Value::Table(table.clone())
        .try_into::<AppConfig>()
        .map_err(|e| CliError::InvalidInput {
            message: format!("Invalid value '{raw}' for '{key}': {e}"),
            source: None,
        })?;

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_reads_nested_values() {
        let config = AppConfig::default();
        assert_eq!(get_config_value(&config, "settings.type").unwrap(), ".luau");
        assert_eq!(get_config_value(&config, "settings.knit").unwrap(), "true");
        assert_eq!(get_config_value(&config, "settings.convention").unwrap(), "fixed");
        assert_eq!(get_config_value(&config, "editor.command").unwrap(), "");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = get_config_value(&AppConfig::default(), "defaults.lang").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn set_creates_file_and_keeps_other_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        set_config_value(&path, "settings.type", ".lua").unwrap();
        set_config_value(&path, "editor.open", "false").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.settings.extension.as_str(), ".lua");
        assert!(!config.editor.open);
        assert!(config.settings.knit);
    }

    #[test]
    fn set_parses_root_lists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        set_config_value(&path, "workspace.roots", "/a, /b").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.workspace.roots.len(), 2);
    }

    #[test]
    fn set_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        assert!(set_config_value(&path, "settings.knit", "maybe").is_err());
        assert!(set_config_value(&path, "settings.type", "lua").is_err());
        assert!(set_config_value(&path, "settings.convention", "camel").is_err());
        assert!(!path.exists());
    }
}
