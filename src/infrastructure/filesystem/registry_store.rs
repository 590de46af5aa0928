//! レジストリファイルの読み書き
//!
//! レジストリは起動ディレクトリ直下の固定名のJSONファイル。
//! 読み込みは起動ごとに一度だけ、書き込みはinitの雛形作成だけ。

use std::path::{Path, PathBuf};

use tokio::fs as async_fs;

use crate::common::error::GitpError;
use crate::common::result::GitpResult;
use crate::domain::entities::registry::Registry;

/// レジストリファイルの固定ファイル名
pub const REGISTRY_FILE_NAME: &str = "gitp_config.json";

/// レジストリファイルのストア
pub struct RegistryStore {
    /// レジストリファイルのフルパス
    path: PathBuf,
}

impl RegistryStore {
    /// ルートディレクトリ配下を指すストアを作成
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(REGISTRY_FILE_NAME),
        }
    }

    /// レジストリファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// レジストリを読み込む
    pub async fn load(&self) -> GitpResult<Registry> {
        let raw = async_fs::read_to_string(&self.path).await.map_err(|error| {
            GitpError::filesystem_error_with_source(
                format!("failed to read {}", self.path.display()),
                Some(self.path.clone()),
                error,
            )
        })?;

        let registry = serde_json::from_str(&raw).map_err(|error| {
            GitpError::serialization_error_with_source(
                format!("failed to parse {}", self.path.display()),
                error,
            )
        })?;

        Ok(registry)
    }

    /// 雛形レジストリを新規作成する
    ///
    /// 既にファイルがある場合はAlreadyExistsで失敗し、何も書き込まない。
    /// 雛形は空エントリ2件、2スペースインデントの整形済みJSON。
    pub async fn init(&self) -> GitpResult<()> {
        if self.path.exists() {
            return Err(GitpError::already_exists(&self.path));
        }

        let scaffold = Registry::scaffold();
        let json = serde_json::to_string_pretty(&scaffold)?;

        async_fs::write(&self.path, json).await.map_err(|error| {
            GitpError::filesystem_error_with_source(
                format!("failed to write {}", self.path.display()),
                Some(self.path.clone()),
                error,
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_pretty_scaffold() {
        let temp_dir = TempDir::new().unwrap();
        let store = RegistryStore::new(temp_dir.path());

        store.init().await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        // 2スペースインデントの整形済みJSONであること
        assert!(raw.contains("  \"repos\": ["));
        assert!(raw.contains("    {"));

        let registry: Registry = serde_json::from_str(&raw).unwrap();
        assert_eq!(registry.repos.len(), 2);
        assert!(registry.repos.iter().all(|repo| !repo.enabled));
        assert!(registry
            .repos
            .iter()
            .all(|repo| !repo.remotes.origin.is_configured()));
    }

    #[tokio::test]
    async fn test_init_round_trip_through_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = RegistryStore::new(temp_dir.path());

        store.init().await.unwrap();
        let registry = store.load().await.unwrap();

        assert_eq!(registry, Registry::scaffold());
    }

    #[tokio::test]
    async fn test_init_fails_when_registry_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = RegistryStore::new(temp_dir.path());

        store.init().await.unwrap();
        let result = store.init().await;

        assert!(matches!(result, Err(GitpError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_filesystem_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = RegistryStore::new(temp_dir.path());

        let result = store.load().await;
        assert!(matches!(result, Err(GitpError::FileSystemError { .. })));
    }

    #[tokio::test]
    async fn test_load_malformed_json_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = RegistryStore::new(temp_dir.path());

        std::fs::write(store.path(), "{ not json").unwrap();

        let result = store.load().await;
        assert!(matches!(result, Err(GitpError::SerializationError { .. })));
    }
}
