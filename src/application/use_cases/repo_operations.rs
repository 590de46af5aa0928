//! 組み込み操作ハンドラ
//!
//! 解決済みのRepoEntryを受け取り、外部のgitコマンドを固定の順序で発行する。
//! ハンドラ内のコマンドは途中で失敗しても後続を実行し続け、最初に起きた
//! エラーだけを呼び出し元へ返す（バッチレベルの「失敗しても止めない」方針を
//! コマンドレベルにも適用している）。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::common::error::GitpError;
use crate::common::result::GitpResult;
use crate::domain::entities::registry::{RepoEntry, User};
use crate::infrastructure::process::CommandExecutor;

/// 1リポジトリに対する組み込み操作の実行器
pub struct RepoOperations {
    /// 外部コマンドの実行器
    executor: Arc<dyn CommandExecutor>,

    /// リポジトリ群の親ディレクトリ（通常はカレントディレクトリ）
    root: PathBuf,
}

impl RepoOperations {
    /// 新しいRepoOperationsインスタンスを作成
    pub fn new(root: impl Into<PathBuf>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            executor,
            root: root.into(),
        }
    }

    /// リポジトリのローカル作業ディレクトリ
    fn repo_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// ローカル作業ディレクトリの存在を要求する
    fn require_local_dir(&self, name: &str) -> GitpResult<PathBuf> {
        let dir = self.repo_dir(name);
        if !dir.exists() {
            return Err(GitpError::not_found(name));
        }
        Ok(dir)
    }

    /// gitコマンドを1つ発行する
    ///
    /// 実行前にコマンドラインをそのまま標準出力へ表示する（操作者向けの
    /// 進行表示。gitの出力自体は子プロセスが親のストリームへ直接書く）。
    async fn run_git(&self, working_dir: &Path, args: &[String]) -> GitpResult<()> {
        println!("git {}", args.join(" "));
        self.executor.execute(working_dir, "git", args).await
    }

    /// 最初のエラーだけを保持する
    fn remember(first_error: &mut Option<GitpError>, result: GitpResult<()>) {
        if let Err(error) = result {
            tracing::debug!("command failed: {error}");
            if first_error.is_none() {
                *first_error = Some(error);
            }
        }
    }

    /// originリモートからcloneする
    ///
    /// 作業ディレクトリが既にあれば案内だけ出して何もしない。
    /// どちらのURLも未設定の場合も何もしない（エラーにはしない）。
    pub async fn clone_repo(&self, entry: &RepoEntry) -> GitpResult<()> {
        if self.repo_dir(&entry.name).exists() {
            println!("{} already exists", entry.name);
            return Ok(());
        }

        let Some(url) = entry.remotes.origin.preferred_url() else {
            tracing::warn!("{}: no origin remote configured, skipping clone", entry.name);
            return Ok(());
        };

        self.run_git(&self.root, &["clone".to_string(), url.to_string()])
            .await
    }

    /// secondリモートを追加する
    pub async fn add_remote(&self, entry: &RepoEntry) -> GitpResult<()> {
        let dir = self.require_local_dir(&entry.name)?;

        let Some(url) = entry.remotes.second.preferred_url() else {
            return Ok(());
        };

        self.run_git(
            &dir,
            &[
                "remote".to_string(),
                "add".to_string(),
                "second".to_string(),
                url.to_string(),
            ],
        )
        .await
    }

    /// user.name / user.email をローカル設定する
    ///
    /// 空でない項目だけを個別に適用する。
    pub async fn configure_user(&self, entry: &RepoEntry, user: &User) -> GitpResult<()> {
        let dir = self.require_local_dir(&entry.name)?;
        let mut first_error = None;

        if !user.name.is_empty() {
            let result = self
                .run_git(
                    &dir,
                    &[
                        "config".to_string(),
                        "user.name".to_string(),
                        user.name.clone(),
                    ],
                )
                .await;
            Self::remember(&mut first_error, result);
        }

        if !user.email.is_empty() {
            let result = self
                .run_git(
                    &dir,
                    &[
                        "config".to_string(),
                        "user.email".to_string(),
                        user.email.clone(),
                    ],
                )
                .await;
            Self::remember(&mut first_error, result);
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// origin（と設定されていればsecond）のmasterからpullする
    pub async fn pull(&self, entry: &RepoEntry) -> GitpResult<()> {
        let dir = self.require_local_dir(&entry.name)?;
        let mut first_error = None;

        let result = self
            .run_git(&dir, &pull_args("origin"))
            .await;
        Self::remember(&mut first_error, result);

        if entry.remotes.second.is_configured() {
            println!();
            let result = self.run_git(&dir, &pull_args("second")).await;
            Self::remember(&mut first_error, result);
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// 全変更をデフォルトメッセージでコミットし、origin（とsecond）へpushする
    ///
    /// ステージする変更が無い場合の空コミットは特別扱いしない。
    /// gitの失敗として表面化する。
    pub async fn push(&self, entry: &RepoEntry, default_comment: &str) -> GitpResult<()> {
        let dir = self.require_local_dir(&entry.name)?;
        let mut first_error = None;

        let result = self
            .run_git(&dir, &["add".to_string(), "-A".to_string()])
            .await;
        Self::remember(&mut first_error, result);

        let result = self
            .run_git(
                &dir,
                &[
                    "commit".to_string(),
                    "-m".to_string(),
                    default_comment.to_string(),
                ],
            )
            .await;
        Self::remember(&mut first_error, result);

        let result = self.run_git(&dir, &push_args("origin")).await;
        Self::remember(&mut first_error, result);

        if entry.remotes.second.is_configured() {
            println!();
            let result = self.run_git(&dir, &push_args("second")).await;
            Self::remember(&mut first_error, result);
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// 任意のgitコマンドを1リポジトリへ転送する
    ///
    /// レジストリ照合とは別に、ローカル作業ディレクトリの存在を要求する。
    /// 無ければNotFoundの明示的な失敗になる（レジストリ照合ミスの
    /// 黙殺とは非対称だが、これは観測された仕様）。
    pub async fn forward_command(&self, name: &str, args: &[String]) -> GitpResult<()> {
        let dir = self.require_local_dir(name)?;
        self.run_git(&dir, args).await
    }
}

fn pull_args(remote: &str) -> Vec<String> {
    vec![
        "pull".to_string(),
        remote.to_string(),
        "master".to_string(),
    ]
}

fn push_args(remote: &str) -> Vec<String> {
    vec![
        "push".to_string(),
        remote.to_string(),
        "master".to_string(),
    ]
}
