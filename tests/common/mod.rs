use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway home directory with a `Documents/GitHub` folder.
pub struct Home {
    pub dir: TempDir,
}

impl Home {
    pub fn new(repos: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let github = dir.path().join("Documents").join("GitHub");
        std::fs::create_dir_all(&github).unwrap();
        for name in repos {
            std::fs::create_dir(github.join(name)).unwrap();
        }
        Self { dir }
    }

    pub fn without_github() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn repo_path(&self, name: &str) -> PathBuf {
        self.dir.path().join("Documents").join("GitHub").join(name)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(".get").join("config.json")
    }

    pub fn write_config(&self, json: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, json).unwrap();
    }

    pub fn read_config(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.config_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn get_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("get").unwrap();
        cmd.env("HOME", self.path());
        cmd.env_remove("GET_LOG");
        cmd.env_remove("EDITOR");
        cmd
    }
}
