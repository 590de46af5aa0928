//! リポジトリレジストリのドメインモデル
//!
//! `gitp_config.json` に永続化されるドキュメントのインメモリ表現。
//! レジストリは起動時に一度だけ読み込まれ、実行中に変更されることはない
//! （initコマンドだけが新しいレジストリファイルを作成する）。

use serde::{Deserialize, Serialize};

/// リモートのURL定義
///
/// sshとhttpsのどちらか一方が使われる。両方設定されている場合はsshを優先する。
/// 空文字列は「未設定」を意味する（レジストリはユーザーが手で編集するため、
/// 雛形の空フィールドをそのまま残せるようにOptionではなく文字列で持つ）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSpec {
    /// SSH形式のURL
    #[serde(default)]
    pub ssh: String,

    /// HTTPS形式のURL
    #[serde(default)]
    pub https: String,
}

impl RemoteSpec {
    /// どちらかのURLが設定されているか
    pub fn is_configured(&self) -> bool {
        !self.ssh.is_empty() || !self.https.is_empty()
    }

    /// 使用するURLを返す（ssh優先、どちらも未設定ならNone）
    pub fn preferred_url(&self) -> Option<&str> {
        if !self.ssh.is_empty() {
            Some(&self.ssh)
        } else if !self.https.is_empty() {
            Some(&self.https)
        } else {
            None
        }
    }
}

/// リポジトリごとのリモート定義
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remotes {
    /// 主リモート（clone元、pull/push先）
    #[serde(default)]
    pub origin: RemoteSpec,

    /// 副リモート（設定時はpull/pushで追加対象になる）
    #[serde(default)]
    pub second: RemoteSpec,
}

/// レジストリに登録された1リポジトリの定義
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// リポジトリ名（ローカルのディレクトリ名と一致する）
    #[serde(default)]
    pub name: String,

    /// リモート定義
    #[serde(default)]
    pub remotes: Remotes,

    /// 無効化されたエントリは名前解決と全リポジトリ走査の両方から除外される
    #[serde(default)]
    pub enabled: bool,
}

/// コミットメッセージ等のデフォルト値
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comments {
    /// pushで使用するデフォルトのコミットメッセージ
    #[serde(default)]
    pub default: String,
}

/// `git config user.*` に設定するユーザー情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// user.name（空なら設定しない）
    #[serde(default)]
    pub name: String,

    /// user.email（空なら設定しない）
    #[serde(default)]
    pub email: String,
}

/// レジストリドキュメント全体
///
/// 不変条件: 有効なエントリの中でリポジトリ名は一意であること。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// 登録リポジトリ（ファイル内の順序がそのまま処理順になる）
    #[serde(default)]
    pub repos: Vec<RepoEntry>,

    /// デフォルト値
    #[serde(default)]
    pub comments: Comments,

    /// ユーザー設定
    #[serde(default)]
    pub user: User,
}

impl Registry {
    /// initコマンドが書き出す雛形を作成
    ///
    /// ユーザーが編集する前提の、空エントリ2件のドキュメント。
    pub fn scaffold() -> Self {
        Self {
            repos: vec![RepoEntry::default(), RepoEntry::default()],
            ..Default::default()
        }
    }

    /// 有効なエントリを登録順に返す
    pub fn enabled_repos(&self) -> impl Iterator<Item = &RepoEntry> {
        self.repos.iter().filter(|repo| repo.enabled)
    }

    /// 有効なエントリから名前の完全一致で検索
    pub fn find_enabled(&self, name: &str) -> Option<&RepoEntry> {
        self.enabled_repos().find(|repo| repo.name == name)
    }
}
