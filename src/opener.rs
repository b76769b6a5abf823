//! Launching the chosen editor on a repository.

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::editor;
use crate::error::{Error, Result};
use crate::flow::LaunchPlan;

/// Launch the planned editor and wait for it to exit.
pub fn launch(plan: &LaunchPlan) -> Result<ExitStatus> {
    open_in_editor(&plan.repository.path, &plan.editor)
}

/// Run `editor <path>` with inherited stdio. An empty `editor` falls back to
/// [`editor::fallback_editor`]. The child's exit status is returned for
/// logging only; only a failure to start is an error.
pub fn open_in_editor(path: &Path, editor: &str) -> Result<ExitStatus> {
    let program = if editor.trim().is_empty() {
        editor::fallback_editor()
    } else {
        editor.to_string()
    };

    tracing::info!(editor = %program, path = %path.display(), "launching editor");
    let status = Command::new(&program)
        .arg(path)
        .status()
        .map_err(|source| Error::Spawn {
            editor: program.clone(),
            source,
        })?;

    if !status.success() {
        tracing::warn!(editor = %program, code = ?status.code(), "editor exited unsuccessfully");
    }
    Ok(status)
}
