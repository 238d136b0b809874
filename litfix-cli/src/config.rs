//! Configuration file loading for litfix.
//!
//! Discovers and loads `litfix.toml` from the config root. CLI `--rule`
//! flags take precedence over the file's enable list.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "litfix.toml";

/// Top-level configuration from litfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LitfixConfig {
    /// Rule enablement.
    pub rules: RulesConfig,
}

/// Rules section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule ids to enable. Defaults to every builtin rule.
    pub enable: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enable: builtin_rule_ids(),
        }
    }
}

fn builtin_rule_ids() -> Vec<String> {
    litfix_rules::builtin_rules()
        .iter()
        .map(|r| r.id().as_str().to_string())
        .collect()
}

/// Discover the litfix.toml config file at the config root.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a litfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<LitfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<LitfixConfig> {
    let config: LitfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the config root, or return defaults if not found.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<LitfixConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(LitfixConfig::default()),
    }
}

/// The enable list after merging config file and CLI flags.
///
/// A non-empty CLI list replaces the file's list outright.
pub fn effective_rules(config: &LitfixConfig, cli_rules: &[String]) -> Vec<String> {
    if cli_rules.is_empty() {
        config.rules.enable.clone()
    } else {
        cli_rules.to_vec()
    }
}
