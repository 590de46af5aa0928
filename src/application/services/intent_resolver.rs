//! CLIトークンをIntentへ解決するサービス
//!
//! 位置引数の先頭トークンは操作キーワードにもリポジトリ名にもなりうる。
//! ここでは小さな決定表を先頭一致で順に適用し、曖昧さを一度だけ解決する。

use crate::common::error::GitpError;
use crate::common::result::GitpResult;
use crate::domain::entities::intent::{Intent, OperationKind, Scope};
use crate::domain::value_objects::repo_name::RepoName;

/// 引数解決サービス
///
/// フラグレイヤ（clap）が処理済みの `all` フラグと位置トークン列を受け取り、
/// 検証済みのIntentを返す。
pub struct IntentResolver;

impl IntentResolver {
    /// トークン列をIntentへ解決する
    ///
    /// `all` フラグは操作キーワードの解釈より先に短絡する。そのため
    /// `-a clone` は「全リポジトリでリテラルコマンド `clone` を実行」と
    /// 解釈される（`-a` でのclone一括実行ではない）。この挙動は元の
    /// 実装と同一であり、変更してはならない。
    pub fn resolve(all: bool, tokens: &[String]) -> GitpResult<Intent> {
        if all {
            let intent = Intent::passthrough(Scope::All, tokens.to_vec());
            intent.validate()?;
            return Ok(intent);
        }

        let Some(first) = tokens.first() else {
            return Err(GitpError::invalid_argument());
        };

        let intent = match first.as_str() {
            "remote" => Self::resolve_two_token_stem(tokens, "add", OperationKind::AddRemote)?,
            "config" => Self::resolve_two_token_stem(tokens, "user", OperationKind::ConfigureUser)?,
            "init" => Self::resolve_single_token_stem(tokens, OperationKind::Init),
            "clone" => Self::resolve_single_token_stem(tokens, OperationKind::Clone),
            "pull" => Self::resolve_single_token_stem(tokens, OperationKind::Pull),
            "push" => Self::resolve_single_token_stem(tokens, OperationKind::Push),
            name => {
                // 先頭トークンはリポジトリ名。残りはgitへの転送トークン。
                let scope = Scope::Named(RepoName::new(name));
                Intent::passthrough(scope, tokens[1..].to_vec())
            }
        };

        intent.validate()?;
        Ok(intent)
    }

    /// `init` / `clone` / `pull` / `push` 形式の解決
    ///
    /// 2つ目のトークンがあればそれが対象リポジトリ名、なければ全リポジトリ。
    fn resolve_single_token_stem(tokens: &[String], operation: OperationKind) -> Intent {
        let scope = match tokens.get(1) {
            Some(name) => Scope::Named(RepoName::new(name)),
            None => Scope::All,
        };
        Intent::builtin(operation, scope)
    }

    /// `remote add` / `config user` 形式の解決
    ///
    /// 2つ目のトークンがサブコマンドと一致しない場合は不正引数。
    /// 3つ目のトークンがあればそれが対象リポジトリ名、なければ全リポジトリ。
    fn resolve_two_token_stem(
        tokens: &[String],
        subcommand: &str,
        operation: OperationKind,
    ) -> GitpResult<Intent> {
        if tokens.get(1).map(String::as_str) != Some(subcommand) {
            return Err(GitpError::invalid_argument());
        }

        let scope = match tokens.get(2) {
            Some(name) => Scope::Named(RepoName::new(name)),
            None => Scope::All,
        };
        Ok(Intent::builtin(operation, scope))
    }
}
