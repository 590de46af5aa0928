//! gitp全体で使用するエラー型

use std::path::PathBuf;
use thiserror::Error;

/// gitpの実行中に発生しうるエラー
///
/// メッセージはそのまま `error:` プレフィックス付きでユーザーに表示されるため、
/// 各バリアントのDisplay表現は原文のまま維持すること。
#[derive(Error, Debug)]
pub enum GitpError {
    /// CLI引数が不正、または実行すべき指示が何もない
    #[error("invalid argument")]
    InvalidArgument,

    /// 作成対象のファイルが既に存在する
    #[error("{} already exists", path.display())]
    AlreadyExists {
        /// 既に存在していたパス
        path: PathBuf,
    },

    /// 指定されたリポジトリのローカル作業ディレクトリが存在しない
    #[error("{name} not found")]
    NotFound {
        /// 見つからなかったリポジトリ名
        name: String,
    },

    /// 外部コマンドが起動できなかった、または非ゼロで終了した
    #[error("{}", execution_failed_message(.command, .exit_code))]
    ExecutionFailed {
        /// 実行しようとしたコマンドライン
        command: String,
        /// 終了コード（シグナル終了時や起動失敗時はNone）
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// ファイルシステム操作に失敗した
    #[error("file system operation failed: {message}")]
    FileSystemError {
        /// 失敗した操作の説明
        message: String,
        /// 対象のパス
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// レジストリファイルのシリアライズ/デシリアライズに失敗した
    #[error("serialization failed: {message}")]
    SerializationError {
        /// 失敗した操作の説明
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl GitpError {
    /// InvalidArgumentエラーを作成
    pub fn invalid_argument() -> Self {
        Self::InvalidArgument
    }

    /// AlreadyExistsエラーを作成
    pub fn already_exists(path: impl Into<PathBuf>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// NotFoundエラーを作成
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// ExecutionFailedエラーを作成
    pub fn execution_failed(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::ExecutionFailed {
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    /// 起動失敗を表すExecutionFailedエラーを作成
    pub fn execution_failed_with_source(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::ExecutionFailed {
            command: command.into(),
            exit_code: None,
            source: Some(source),
        }
    }

    /// FileSystemErrorエラーを作成
    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    /// 原因付きのFileSystemErrorエラーを作成
    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    /// SerializationErrorエラーを作成
    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: None,
        }
    }

    /// 原因付きのSerializationErrorエラーを作成
    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(source),
        }
    }
}

fn execution_failed_message(command: &str, exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("command `{command}` failed with exit code {code}"),
        None => format!("command `{command}` failed"),
    }
}

impl From<std::io::Error> for GitpError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("file system operation failed", None, error)
    }
}

impl From<serde_json::Error> for GitpError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}
