use super::*;
use crate::error::Error;
use tempfile::TempDir;

fn config_path(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join(".get").join("config.json")
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&config_path(&temp)).unwrap();
    assert_eq!(config.default_editor, "code");
    assert!(config.repositories.is_empty());
}

#[test]
fn test_load_does_not_create_file() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);
    Config::load_from(&path).unwrap();
    assert!(!path.exists());
}

#[test]
fn test_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);

    let mut config = Config {
        default_editor: "subl".into(),
        ..Config::default()
    };
    config.remember(&Repository::new("api", "/src/api"), "vim");
    config.update_repository_editor("web", "code");
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);

    loaded.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_save_creates_directory() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);
    Config::default().save_to(&path).unwrap();
    assert!(path.is_file());
}

#[cfg(unix)]
#[test]
fn test_save_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);
    Config::default().save_to(&path).unwrap();

    let dir_mode = std::fs::metadata(path.parent().unwrap()).unwrap().permissions().mode();
    assert_eq!(dir_mode & 0o777, 0o700);
    let file_mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(file_mode & 0o111, 0);
}

#[test]
fn test_saved_document_shape() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);

    let mut config = Config::default();
    config.remember(&Repository::new("api", "/src/api"), "vim");
    config.repositories.insert(
        "web".into(),
        Repository {
            name: "web".into(),
            ..Repository::default()
        },
    );
    config.save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(content.trim_end(), @r#"
    {
      "default_editor": "code",
      "repositories": {
        "api": {
          "path": "/src/api",
          "name": "api",
          "editor": "vim"
        },
        "web": {
          "path": "",
          "name": "web"
        }
      }
    }
    "#);
}

#[test]
fn test_null_repositories_normalised() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"default_editor": "vim", "repositories": null}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.default_editor, "vim");
    assert!(config.repositories.is_empty());
}

#[test]
fn test_missing_fields_use_defaults() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{}").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_malformed_json_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
}

#[test]
fn test_unreadable_path_is_read_error() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);
    std::fs::create_dir_all(&path).unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
}

#[test]
fn test_config_dir_is_a_file_is_read_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".get"), "not a directory").unwrap();

    let err = Config::load_from(&config_path(&temp)).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let temp = TempDir::new().unwrap();
    let path = config_path(&temp);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"default_editor": "vim", "theme": "dark", "repositories": {"api": {"path": "/src/api", "name": "api", "editor": "code", "pinned": true}}}"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.default_editor, "vim");
    assert_eq!(config.repository_editor("api"), Some("code"));
}

#[test]
fn test_update_creates_entry() {
    let mut config = Config::default();
    config.update_repository_editor("repo", "vim");

    let entry = &config.repositories["repo"];
    assert_eq!(entry.name, "repo");
    assert_eq!(entry.editor.as_deref(), Some("vim"));
}

#[test]
fn test_update_overwrites_editor_only() {
    let mut config = Config::default();
    config.remember(&Repository::new("repo", "/src/repo"), "vim");
    config.update_repository_editor("repo", "emacs");

    let entry = &config.repositories["repo"];
    assert_eq!(entry.path, std::path::PathBuf::from("/src/repo"));
    assert_eq!(entry.editor.as_deref(), Some("emacs"));
}

#[test]
fn test_repository_editor_lookup() {
    let mut config = Config::default();
    assert_eq!(config.repository_editor("repo"), None);

    config.update_repository_editor("repo", "");
    assert_eq!(config.repository_editor("repo"), None);

    config.update_repository_editor("repo", "vim");
    assert_eq!(config.repository_editor("repo"), Some("vim"));
}

#[test]
fn test_get_set_default_editor() {
    let mut config = Config::default();
    config.set_value("default_editor", "zed").unwrap();
    assert_eq!(config.get_value("default_editor").unwrap(), "zed");
}

#[test]
fn test_get_set_repository_editor() {
    let mut config = Config::default();
    assert_eq!(config.get_value("repositories.my.repo.editor").unwrap(), "");

    config.set_value("repositories.my.repo.editor", "vim").unwrap();
    assert_eq!(config.repository_editor("my.repo"), Some("vim"));

    config.set_value("repositories.my.repo.editor", "").unwrap();
    assert_eq!(config.repository_editor("my.repo"), None);
}

#[test]
fn test_unknown_key() {
    let mut config = Config::default();
    assert!(matches!(
        config.get_value("editor.command"),
        Err(Error::UnknownConfigKey(_))
    ));
    assert!(matches!(
        config.set_value("repositories..editor", "vim"),
        Err(Error::UnknownConfigKey(_))
    ));
}
