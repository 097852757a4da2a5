use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};

use crate::render::Format;

pub const CONFIG_FILE_NAME: &str = ".locpullrc.json";

/// Fully resolved pull configuration.
///
/// Constructed once before the pipeline runs; nothing is defaulted or
/// re-resolved mid-pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// API token, or `$VAR` to read it from the environment.
    pub api_token: String,
    #[serde(deserialize_with = "string_or_number")]
    pub project_id: String,
    /// Output type.
    #[serde(rename = "type")]
    pub format: Format,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub filters: Vec<String>,
    /// Languages to export, in processing order.
    pub languages: Vec<String>,
    /// Alias language -> source language. Every file written for the source
    /// is replicated at the alias's resolved path; aliases never fetch.
    #[serde(default)]
    pub language_alias: BTreeMap<String, String>,
    /// Singular path template with a `{LANGUAGE}` token.
    #[serde(default)]
    pub path: Option<String>,
    /// Per-language replacements for `path`.
    #[serde(default)]
    pub path_replace: BTreeMap<String, String>,
    /// Plural path template (Apple `.stringsdict` output).
    #[serde(default)]
    pub path_plural: Option<String>,
    /// Context path template with `{LANGUAGE}` and `{CONTEXT}` tokens.
    #[serde(default)]
    pub context_path: Option<String>,
    /// Per-language replacements for `context_path`, still containing
    /// `{CONTEXT}`.
    #[serde(default)]
    pub context_path_replace: BTreeMap<String, String>,
    /// Plural context path template.
    #[serde(default)]
    pub context_path_plural: Option<String>,
    /// Literal first line of generated source-table files.
    #[serde(default)]
    pub header: Option<String>,
}

impl Config {
    /// Validate configuration values and resolve `$VAR` indirections.
    pub fn finalize(mut self) -> Result<Self> {
        self.api_token = from_env(&self.api_token)?;
        self.project_id = from_env(&self.project_id)?;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must not be empty");
        }
        if self.path.is_none() && self.path_replace.is_empty() {
            bail!("either 'path' or 'path_replace' must be configured");
        }
        if self.header.is_some() && self.format != Format::SourceTable {
            bail!("'header' is only supported for the source_table type");
        }
        Ok(())
    }

    /// True if any context destination is configured. Without one, context
    /// groups are dropped from the export entirely.
    pub fn has_context_path(&self) -> bool {
        self.context_path.is_some() || !self.context_path_replace.is_empty()
    }
}

/// Values starting with `$` are environment indirections.
fn from_env(value: &str) -> Result<String> {
    match value.strip_prefix('$') {
        Some(key) => {
            env::var(key).with_context(|| format!("Environment variable '{}' is not set", key))
        }
        None => Ok(value.to_owned()),
    }
}

/// Accepts both `"12345"` and `12345` for service-side identifiers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(value) => value,
        StringOrNumber::Number(value) => value.to_string(),
    })
}

pub fn default_config_json() -> Result<String> {
    let template = serde_json::json!({
        "api_token": "$LOCPULL_API_TOKEN",
        "project_id": "12345",
        "type": "apple_strings",
        "languages": ["en"],
        "path": "Resources/{LANGUAGE}.lproj/Localizable.strings"
    });
    serde_json::to_string_pretty(&template).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and finalize configuration from an explicit file or by walking up
/// from `start_dir`.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => find_config_file(start_dir)
            .with_context(|| format!("No {} found. Run 'locpull init' first.", CONFIG_FILE_NAME))?,
    };

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.finalize()
}
