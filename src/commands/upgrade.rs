use anyhow::{bail, Context, Result};
use std::process::Command;

/// Re-run the install script for this platform with inherited stdio.
pub fn cmd_upgrade() -> Result<()> {
    let mut command = upgrade_command()?;
    tracing::info!(?command, "running installer");

    let status = command.status().context("Failed to run installer")?;
    if !status.success() {
        bail!("Upgrade failed: installer exited with {status}");
    }
    Ok(())
}

#[cfg(unix)]
fn upgrade_command() -> Result<Command> {
    const INSTALL_SH: &str = "https://get.aio-web.xyz/install.sh";
    let mut cmd = Command::new("bash");
    cmd.arg("-c").arg(format!("curl -fsSL {INSTALL_SH} | bash"));
    Ok(cmd)
}

#[cfg(windows)]
fn upgrade_command() -> Result<Command> {
    const INSTALL_PS1: &str = "https://get.aio-web.xyz/install.ps1";
    let mut cmd = Command::new("powershell");
    cmd.arg("-Command").arg(format!("iwr -useb {INSTALL_PS1} | iex"));
    Ok(cmd)
}

#[cfg(not(any(unix, windows)))]
fn upgrade_command() -> Result<Command> {
    bail!("Upgrade not supported on {}", std::env::consts::OS)
}
