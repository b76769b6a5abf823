use anyhow::{Context, Result};
use get_repo::prompt::{Prompter, TerminalPrompter};

/// Remove the running executable after confirmation.
pub fn cmd_uninstall(skip_confirm: bool) -> Result<()> {
    let exe = std::env::current_exe().context("Failed to get current executable path")?;

    if !skip_confirm {
        let confirmed = TerminalPrompter::stdio()
            .confirm("Are you sure you want to uninstall the 'get' CLI?", false)?;
        if !confirmed {
            println!("Uninstall canceled.");
            return Ok(());
        }
    }

    std::fs::remove_file(&exe).with_context(|| format!("Failed to remove {}", exe.display()))?;
    println!("Uninstalled successfully.");
    Ok(())
}
