//! 引数解決の結果を表すIntentモデル

use crate::common::error::GitpError;
use crate::common::result::GitpResult;
use crate::domain::value_objects::repo_name::RepoName;

/// 組み込み操作の閉じた列挙
///
/// 元の実装では `"remote add"` のような複合文字列を組み立ててから
/// 文字列比較でディスパッチしていたが、typo起因の分岐漏れを型で
/// 排除するため、引数解決の時点で一度だけ決定する列挙に置き換えている。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// レジストリファイルの雛形を作成する
    Init,
    /// originリモートからcloneする
    Clone,
    /// secondリモートを追加する
    AddRemote,
    /// user.name / user.email をローカル設定する
    ConfigureUser,
    /// origin（とsecond）からpullする
    Pull,
    /// 全変更をコミットしてorigin（とsecond）へpushする
    Push,
}

/// 操作の対象範囲
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// 有効な全リポジトリ
    All,
    /// 名前で指定された1リポジトリ
    Named(RepoName),
    /// 対象が決まらなかった（検証で弾かれる）
    Unset,
}

/// CLIトークンから解決された、検証済みの実行指示
///
/// `operation` がNoneの場合、`forwarded_args` はgitへそのまま転送する
/// パススルーコマンドを表す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    /// 組み込み操作（Noneはパススルー）
    pub operation: Option<OperationKind>,

    /// 対象範囲
    pub scope: Scope,

    /// gitへ逐語的に転送するトークン列
    pub forwarded_args: Vec<String>,
}

impl Intent {
    /// 組み込み操作のIntentを作成
    pub fn builtin(operation: OperationKind, scope: Scope) -> Self {
        Self {
            operation: Some(operation),
            scope,
            forwarded_args: Vec::new(),
        }
    }

    /// パススルーコマンドのIntentを作成
    pub fn passthrough(scope: Scope, forwarded_args: Vec<String>) -> Self {
        Self {
            operation: None,
            scope,
            forwarded_args,
        }
    }

    /// Intentの構文的な妥当性を検証
    ///
    /// 以下は「実行可能な指示が何もない」形であり、ディスパッチ前に
    /// 弾かなければならない:
    /// - 操作なし・対象なし
    /// - 操作なし・全リポジトリ対象・転送トークンなし
    /// - 操作なし・名前指定・転送トークンなし
    pub fn validate(&self) -> GitpResult<()> {
        if self.operation.is_none() {
            match &self.scope {
                Scope::Unset => return Err(GitpError::invalid_argument()),
                Scope::All | Scope::Named(_) if self.forwarded_args.is_empty() => {
                    return Err(GitpError::invalid_argument())
                }
                _ => {}
            }
        }
        Ok(())
    }
}
