//! Persisted editor preferences in `~/.get/config.json`.

mod ops;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::repository::Repository;

/// Editor offered as the default choice on a fresh install.
pub const DEFAULT_EDITOR: &str = "code";

/// Persisted launcher settings, stored as JSON at [`Config::path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pre-selected entry in the editor menu.
    pub default_editor: String,
    /// Remembered repositories keyed by directory name.
    #[serde(deserialize_with = "null_as_empty")]
    pub repositories: BTreeMap<String, Repository>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_editor: DEFAULT_EDITOR.to_string(),
            repositories: BTreeMap::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Repository>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
