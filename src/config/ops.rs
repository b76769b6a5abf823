use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};
use crate::repository::Repository;

impl Config {
    /// `~/.get/config.json`
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
        Ok(home.join(".get").join("config.json"))
    }

    /// Load from [`Config::path`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, falling back to defaults only when the file does not
    /// exist. Any other I/O failure is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            repositories = config.repositories.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Save to [`Config::path`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Overwrite `path` with 2-space indented JSON, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_private_dir(parent).map_err(|source| Error::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let mut content = serde_json::to_string_pretty(self).map_err(Error::ConfigSerialize)?;
        content.push('\n');
        std::fs::write(path, content).map_err(|source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Set the remembered editor for `name`, creating the entry if needed.
    /// In-memory only; call [`Config::save`] to persist.
    pub fn update_repository_editor(&mut self, name: &str, editor: &str) {
        let entry = self
            .repositories
            .entry(name.to_string())
            .or_insert_with(|| Repository {
                name: name.to_string(),
                ..Repository::default()
            });
        entry.editor = Some(editor.to_string());
    }

    /// Like [`Config::update_repository_editor`], also refreshing the stored path.
    pub fn remember(&mut self, repo: &Repository, editor: &str) {
        self.update_repository_editor(&repo.name, editor);
        if let Some(entry) = self.repositories.get_mut(&repo.name) {
            entry.path.clone_from(&repo.path);
        }
    }

    /// Remembered editor for `name`; empty strings count as unset.
    #[must_use]
    pub fn repository_editor(&self, name: &str) -> Option<&str> {
        self.repositories
            .get(name)
            .and_then(|repo| repo.editor.as_deref())
            .filter(|editor| !editor.is_empty())
    }

    /// Get a config value by key: `default_editor` or `repositories.<name>.editor`.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match ConfigKey::parse(key)? {
            ConfigKey::DefaultEditor => Ok(self.default_editor.clone()),
            ConfigKey::RepositoryEditor(name) => {
                Ok(self.repository_editor(name).unwrap_or_default().to_string())
            }
        }
    }

    /// Set a config value by key. An empty repository editor clears it.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match ConfigKey::parse(key)? {
            ConfigKey::DefaultEditor => self.default_editor = value.to_string(),
            ConfigKey::RepositoryEditor(name) if value.is_empty() => {
                if let Some(repo) = self.repositories.get_mut(name) {
                    repo.editor = None;
                }
            }
            ConfigKey::RepositoryEditor(name) => self.update_repository_editor(name, value),
        }
        Ok(())
    }
}

enum ConfigKey<'a> {
    DefaultEditor,
    RepositoryEditor(&'a str),
}

impl<'a> ConfigKey<'a> {
    fn parse(key: &'a str) -> Result<Self> {
        if key == "default_editor" {
            return Ok(Self::DefaultEditor);
        }
        key.strip_prefix("repositories.")
            .and_then(|rest| rest.strip_suffix(".editor"))
            .filter(|name| !name.is_empty())
            .map(Self::RepositoryEditor)
            .ok_or_else(|| Error::UnknownConfigKey(key.to_string()))
    }
}

fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)
}
