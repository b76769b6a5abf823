//! Picking a repository and deciding which editor opens it.

use std::path::PathBuf;

use crate::config::Config;
use crate::editor;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::repository::{self, Repository};


/// Menu entry that switches to free-text editor entry.
pub const OTHER: &str = "Other";

/// What to launch once resolution has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// The matched repository.
    pub repository: Repository,
    /// Editor command; may be empty if the user typed nothing under "Other".
    pub editor: String,
}

/// State for one invocation: the loaded config, where it lives, and who answers questions.
pub struct Session<P> {
    config: Config,
    config_path: PathBuf,
    prompter: P,
    installed: Option<Vec<String>>,
}

impl<P: Prompter> Session<P> {
    /// Start a session; installed editors are detected on first use.
    pub const fn new(config: Config, config_path: PathBuf, prompter: P) -> Self {
        Self {
            config,
            config_path,
            prompter,
            installed: None,
        }
    }

    #[cfg(test)]
    #[must_use]
    fn with_installed_editors(mut self, editors: Vec<String>) -> Self {
        self.installed = Some(editors);
        self
    }

    /// The in-memory config, including any changes made during the session.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Interactive entry point: choose a repository from the full list.
    pub fn pick_repository(&mut self, repos: &[Repository], parent: PathBuf) -> Result<Repository> {
        if repos.is_empty() {
            return Err(Error::NoRepositories(parent));
        }
        let names: Vec<String> = repos.iter().map(|r| r.name.clone()).collect();
        let name = self.prompter.select("Select a repository:", &names, None)?;
        repos
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or(Error::RepositoryNotFound(name))
    }

    /// Match `fragment` against `repos` and resolve the editor for the hit.
    pub fn open(
        &mut self,
        repos: &[Repository],
        fragment: &str,
        ignore_config: bool,
    ) -> Result<LaunchPlan> {
        let repository = repository::find_match(repos, fragment)?.clone();
        tracing::debug!(fragment, repository = %repository.name, "matched repository");
        self.plan(repository, ignore_config)
    }

    /// Resolve the editor for an already chosen repository.
    pub fn plan(&mut self, repository: Repository, ignore_config: bool) -> Result<LaunchPlan> {
        let editor = self.resolve_editor(&repository, ignore_config)?;
        Ok(LaunchPlan { repository, editor })
    }

    /// Stored preference unless bypassed; otherwise ask, and remember the answer
    /// when it was not bypassed.
    pub fn resolve_editor(&mut self, repo: &Repository, ignore_config: bool) -> Result<String> {
        if ignore_config {
            return self.choose_editor(repo, true);
        }
        if let Some(editor) = self.config.repository_editor(&repo.name) {
            tracing::debug!(editor, "using remembered editor");
            return Ok(editor.to_string());
        }
        let editor = self.choose_editor(repo, false)?;
        self.persist(repo, &editor)?;
        Ok(editor)
    }

    fn choose_editor(&mut self, repo: &Repository, offer_remember: bool) -> Result<String> {
        let mut options = self
            .installed
            .get_or_insert_with(editor::detect_installed_editors)
            .clone();
        options.push(OTHER.to_string());

        let default = self.config.default_editor.clone();
        let mut choice = self
            .prompter
            .select("Select an editor:", &options, Some(&default))?;
        if choice == OTHER {
            choice = self.prompter.input("Enter the editor command:")?;
        }

        if offer_remember {
            let question = format!(
                "Do you want to set '{choice}' as the default editor for {}?",
                repo.name
            );
            if self.prompter.confirm(&question, false)? {
                self.persist(repo, &choice)?;
            }
        }
        Ok(choice)
    }

    fn persist(&mut self, repo: &Repository, editor: &str) -> Result<()> {
        self.config.remember(repo, editor);
        self.config.save_to(&self.config_path)
    }
}
