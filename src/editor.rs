//! Catalog of known editors and PATH detection.

/// General-purpose editors, offered first.
pub const COMMON_EDITORS: &[&str] = &["code", "subl", "atom", "vim", "emacs", "notepad++"];

/// JetBrains IDE launchers.
pub const JETBRAINS_EDITORS: &[&str] = &[
    "phpstorm",
    "goland",
    "idea",
    "webstorm",
    "pycharm",
    "clion",
    "datagrip",
    "rider",
    "rubymine",
    "android-studio",
];

/// Environment variable consulted when no editor has been chosen.
pub const EDITOR_ENV: &str = "EDITOR";

/// Every registry entry in declaration order, common editors first.
pub fn known_editors() -> impl Iterator<Item = &'static str> {
    COMMON_EDITORS.iter().chain(JETBRAINS_EDITORS).copied()
}

/// Editors from the registry that resolve on the executable search path.
#[must_use]
pub fn detect_installed_editors() -> Vec<String> {
    let found = detect_with(is_valid_editor);
    tracing::debug!(editors = ?found, "detected installed editors");
    found
}

/// Filter the registry with a custom resolver, keeping declaration order.
pub fn detect_with(mut resolves: impl FnMut(&str) -> bool) -> Vec<String> {
    known_editors()
        .filter(|&name| resolves(name))
        .map(str::to_string)
        .collect()
}

/// Return true if `editor` is found anywhere in PATH.
#[must_use]
pub fn is_valid_editor(editor: &str) -> bool {
    which::which(editor).is_ok()
}

/// Editor used when the resolved command is empty: `$EDITOR`, else the
/// platform's stock editor.
#[must_use]
pub fn fallback_editor() -> String {
    fallback_from(std::env::var(EDITOR_ENV).ok())
}

fn fallback_from(env_value: Option<String>) -> String {
    match env_value {
        Some(editor) if !editor.trim().is_empty() => editor,
        _ if cfg!(windows) => "notepad.exe".to_string(),
        _ => "nano".to_string(),
    }
}
