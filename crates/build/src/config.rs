//! Site configuration loaded from YAML.
//!
//! Alias registrations can be declared in site config as well as in code;
//! [`config_hook`] turns the config entries into a pre-render hook.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::{BuildContext, PreRenderHook};
use glint_core::RegistryError;

/// Site-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title, for operator-facing output.
    #[serde(default)]
    pub title: String,
    /// Alias registrations to perform before rendering.
    #[serde(default)]
    pub extra_aliases: Vec<AliasEntry>,
}

/// A declarative alias registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasEntry {
    /// Id of the grammar to alias (must already be registered).
    pub base: String,
    /// Display title for the derived grammar.
    pub title: String,
    /// Selector aliases to register.
    pub aliases: Vec<String>,
}

/// Errors emitted while loading site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML failed to parse into the config shape.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl SiteConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }
}

/// Build a pre-render hook that registers each configured alias entry.
///
/// Entries are applied in config order; the first entry naming an unknown
/// base grammar aborts the build with `MissingBaseGrammar`.
pub fn config_hook(entries: Vec<AliasEntry>) -> impl PreRenderHook {
    move |ctx: &mut BuildContext| -> Result<(), RegistryError> {
        for entry in &entries {
            let aliases: Vec<&str> = entry.aliases.iter().map(String::as_str).collect();
            ctx.registry_mut()
                .register_alias(&entry.base, &entry.title, &aliases)?;
        }
        Ok(())
    }
}
