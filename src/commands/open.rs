use anyhow::Result;
use get_repo::{opener, prompt::TerminalPrompter, repository, Config, Session};

/// `get open <REPO>`: substring match, resolve editor, launch.
pub fn cmd_open(fragment: &str, ignore_config: bool) -> Result<()> {
    let config_path = Config::path()?;
    let config = Config::load_from(&config_path)?;
    let repos = repository::find_repositories()?;

    let mut session = Session::new(config, config_path, TerminalPrompter::stdio());
    let plan = session.open(&repos, fragment, ignore_config)?;
    opener::launch(&plan)?;
    Ok(())
}

/// `get`: list every repository, let the user pick one, then open it.
pub fn cmd_interactive(ignore_config: bool) -> Result<()> {
    let config_path = Config::path()?;
    let config = Config::load_from(&config_path)?;
    let parent = repository::github_dir()?;
    let repos = repository::find_repositories_in(&parent)?;

    let mut session = Session::new(config, config_path, TerminalPrompter::stdio());
    let repo = session.pick_repository(&repos, parent)?;
    let plan = session.plan(repo, ignore_config)?;
    opener::launch(&plan)?;
    Ok(())
}
