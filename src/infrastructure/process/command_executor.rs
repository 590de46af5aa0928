//! 外部コマンドの実行器
//!
//! コアは全てのバージョン管理操作をこの境界経由で発行する。
//! テストではこのトレイトを記録用の実装に差し替える。

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;

use crate::common::error::GitpError;
use crate::common::result::GitpResult;

/// 外部コマンド実行の抽象
///
/// 非ゼロ終了は全てExecutionFailedとして扱う。タイムアウトや
/// キャンセルの仕組みは持たない（外部コマンドが固まればツールも固まる）。
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// 指定の作業ディレクトリでコマンドを実行し、完了まで待つ
    async fn execute(&self, working_dir: &Path, program: &str, args: &[String]) -> GitpResult<()>;
}

/// 実プロセスを起動するCommandExecutor実装
///
/// 標準入出力は親プロセスのものを継承する。gitの対話プロンプトや
/// 進捗表示はそのままユーザーの端末に流れる。
pub struct SystemCommandExecutor;

#[async_trait]
impl CommandExecutor for SystemCommandExecutor {
    async fn execute(&self, working_dir: &Path, program: &str, args: &[String]) -> GitpResult<()> {
        let command_line = format!("{} {}", program, args.join(" "));
        tracing::debug!(
            command = %command_line,
            working_dir = %working_dir.display(),
            "executing external command"
        );

        let status = tokio::process::Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|error| {
                GitpError::execution_failed_with_source(command_line.clone(), error)
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(GitpError::execution_failed(command_line, status.code()))
        }
    }
}
