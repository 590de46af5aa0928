//! Intentをリポジトリ群へディスパッチするユースケース
//!
//! 検証済みのIntentとレジストリから対象リポジトリ集合を決定し、
//! 登録順に1件ずつ操作ハンドラを起動する。全リポジトリ対象のバッチでは
//! 1件の失敗で残りを打ち切らず、結果を記録してループ完了後に最初の
//! エラーを呼び出し元へ伝播する。

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::use_cases::repo_operations::RepoOperations;
use crate::common::error::GitpError;
use crate::common::result::GitpResult;
use crate::domain::entities::intent::{Intent, OperationKind, Scope};
use crate::domain::entities::registry::Registry;
use crate::infrastructure::filesystem::registry_store::RegistryStore;
use crate::infrastructure::process::CommandExecutor;

/// 操作者向けの区切り線の幅
const SEPARATOR_WIDTH: usize = 42;

/// 1リポジトリの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOutcome {
    /// 成功
    Success,
    /// ローカル作業ディレクトリが存在しなかった
    NotFound,
    /// 外部コマンドが失敗した
    ExecutionFailed(String),
}

/// リポジトリごとの結果レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// 対象リポジトリ名
    pub repo_name: String,

    /// 処理結果
    pub outcome: RepoOutcome,
}

/// ディスパッチ全体の集計
#[derive(Debug, Default)]
pub struct DispatchSummary {
    /// 各リポジトリの結果（処理順）
    pub results: Vec<DispatchResult>,

    /// 成功件数
    pub success_count: usize,

    /// 失敗件数
    pub failure_count: usize,
}

impl DispatchSummary {
    /// 結果を追加して集計を更新
    pub fn add_result(&mut self, result: DispatchResult) {
        match result.outcome {
            RepoOutcome::Success => self.success_count += 1,
            RepoOutcome::NotFound | RepoOutcome::ExecutionFailed(_) => self.failure_count += 1,
        }
        self.results.push(result);
    }

    /// 1件も失敗していないか
    pub fn is_success(&self) -> bool {
        self.failure_count == 0
    }
}

/// 1リポジトリ分のディスパッチ結果と、伝播用のエラー
struct RepoDispatch {
    result: DispatchResult,
    error: Option<GitpError>,
}

/// ディスパッチエンジン
pub struct DispatchOperationUseCase {
    /// リポジトリ群とレジストリファイルの親ディレクトリ
    root: PathBuf,

    /// 外部コマンドの実行器
    executor: Arc<dyn CommandExecutor>,
}

impl DispatchOperationUseCase {
    /// 新しいDispatchOperationUseCaseインスタンスを作成
    pub fn new(root: impl Into<PathBuf>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            root: root.into(),
            executor,
        }
    }

    /// Intentを実行する
    ///
    /// initはレジストリを読まずにファイル作成だけを行う。それ以外は
    /// レジストリを読み込み、スコープに応じて1件または全件を処理する。
    pub async fn execute(&self, intent: &Intent) -> GitpResult<DispatchSummary> {
        intent.validate()?;

        let store = RegistryStore::new(&self.root);

        // initはレジストリ本体を経由しない。既存ファイルがあれば即失敗。
        if intent.operation == Some(OperationKind::Init) {
            store.init().await?;
            return Ok(DispatchSummary::default());
        }

        let registry = store.load().await?;
        let operations = RepoOperations::new(&self.root, Arc::clone(&self.executor));

        match &intent.scope {
            Scope::All => self.dispatch_all(&operations, &registry, intent).await,
            Scope::Named(name) => {
                let mut summary = DispatchSummary::default();
                match self
                    .dispatch_named(&operations, &registry, name.as_str(), intent)
                    .await
                {
                    // レジストリ照合ミスは黙殺（出力もエラーも出さない）
                    None => Ok(summary),
                    Some(dispatch) => {
                        summary.add_result(dispatch.result);
                        match dispatch.error {
                            Some(error) => Err(error),
                            None => Ok(summary),
                        }
                    }
                }
            }
            Scope::Unset => Err(GitpError::invalid_argument()),
        }
    }

    /// 有効な全リポジトリを登録順に処理する
    ///
    /// 各リポジトリの失敗は記録するだけで走査は続行し、ループ完了後に
    /// 最初のエラーを返す。
    async fn dispatch_all(
        &self,
        operations: &RepoOperations,
        registry: &Registry,
        intent: &Intent,
    ) -> GitpResult<DispatchSummary> {
        let mut summary = DispatchSummary::default();
        let mut first_error = None;

        for entry in registry.enabled_repos() {
            let Some(dispatch) = self
                .dispatch_named(operations, registry, &entry.name, intent)
                .await
            else {
                continue;
            };

            summary.add_result(dispatch.result);
            if let Some(error) = dispatch.error {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }

        tracing::debug!(
            success = summary.success_count,
            failed = summary.failure_count,
            "batch dispatch finished"
        );

        match first_error {
            Some(error) => Err(error),
            None => Ok(summary),
        }
    }

    /// 名前で指定された1リポジトリを処理する
    ///
    /// 有効なエントリに名前が無ければNone（黙殺）。見つかった場合は
    /// 区切り線とリポジトリ名を表示してからハンドラを起動する。
    async fn dispatch_named(
        &self,
        operations: &RepoOperations,
        registry: &Registry,
        name: &str,
        intent: &Intent,
    ) -> Option<RepoDispatch> {
        let entry = registry.find_enabled(name)?;

        println!("{}", "-".repeat(SEPARATOR_WIDTH));
        println!("[{}]", entry.name);
        println!();

        let handler_result = match intent.operation {
            Some(OperationKind::Clone) => operations.clone_repo(entry).await,
            Some(OperationKind::AddRemote) => operations.add_remote(entry).await,
            Some(OperationKind::ConfigureUser) => {
                operations.configure_user(entry, &registry.user).await
            }
            Some(OperationKind::Pull) => operations.pull(entry).await,
            Some(OperationKind::Push) => {
                operations.push(entry, &registry.comments.default).await
            }
            // initはexecuteで先に処理済み
            Some(OperationKind::Init) => Ok(()),
            None => {
                operations
                    .forward_command(&entry.name, &intent.forwarded_args)
                    .await
            }
        };

        let dispatch = match handler_result {
            Ok(()) => RepoDispatch {
                result: DispatchResult {
                    repo_name: entry.name.clone(),
                    outcome: RepoOutcome::Success,
                },
                error: None,
            },
            Err(error) => {
                let outcome = match &error {
                    GitpError::NotFound { .. } => RepoOutcome::NotFound,
                    other => RepoOutcome::ExecutionFailed(other.to_string()),
                };
                RepoDispatch {
                    result: DispatchResult {
                        repo_name: entry.name.clone(),
                        outcome,
                    },
                    error: Some(error),
                }
            }
        };

        Some(dispatch)
    }
}
