//! Locating repository checkouts under `~/Documents/GitHub`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A locally cloned repository: one immediate subdirectory of the GitHub folder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Repository {
    /// Absolute path to the checkout.
    #[serde(default)]
    pub path: PathBuf,
    /// Directory basename; also the config map key.
    #[serde(default)]
    pub name: String,
    /// Remembered editor, only ever populated through the config store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Repository {
    /// Candidate with no stored preference.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            editor: None,
        }
    }

    /// Case-insensitive substring test against the repository name.
    #[must_use]
    pub fn matches(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// The folder scanned for repositories: `~/Documents/GitHub`.
pub fn github_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join("Documents").join("GitHub"))
}

/// List the repositories under [`github_dir`].
pub fn find_repositories() -> Result<Vec<Repository>> {
    find_repositories_in(&github_dir()?)
}

/// List immediate subdirectories of `dir` as repositories, in directory
/// listing order. Regular files are skipped; nothing is recursed into.
pub fn find_repositories_in(dir: &Path) -> Result<Vec<Repository>> {
    let list_err = |source| Error::ListRepositories {
        path: dir.to_path_buf(),
        source,
    };

    let mut repos = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        // Entry type as listed, so symlinks are not followed.
        if !entry.file_type().map_err(list_err)?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        repos.push(Repository::new(name, entry.path()));
    }

    tracing::debug!(dir = %dir.display(), count = repos.len(), "scanned repositories");
    Ok(repos)
}

/// First repository, in locator order, whose name contains `fragment`.
pub fn find_match<'a>(repos: &'a [Repository], fragment: &str) -> Result<&'a Repository> {
    repos
        .iter()
        .find(|repo| repo.matches(fragment))
        .ok_or_else(|| Error::RepositoryNotFound(fragment.to_string()))
}
