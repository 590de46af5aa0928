//! リポジトリ名の値オブジェクト

use serde::{Deserialize, Serialize};
use std::fmt;

/// サニタイズ済みのリポジトリ名
///
/// CLIトークン由来の名前はどの解決経路を通った場合でも一律に
/// パス区切り文字（`/` と `\`）を取り除く。シェル補完がディレクトリ名に
/// 付ける末尾の `/` をそのまま渡せるようにするための仕様。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoName(String);

impl RepoName {
    /// 生のトークンからサニタイズして作成
    pub fn new(raw: &str) -> Self {
        let sanitized: String = raw.chars().filter(|c| *c != '/' && *c != '\\').collect();
        Self(sanitized)
    }

    /// 文字列スライスとして取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// サニタイズの結果、名前が空になったか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RepoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_unchanged() {
        assert_eq!(RepoName::new("foo").as_str(), "foo");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(RepoName::new("foo/").as_str(), "foo");
    }

    #[test]
    fn test_trailing_backslash_is_stripped() {
        assert_eq!(RepoName::new("foo\\").as_str(), "foo");
    }

    #[test]
    fn test_separators_are_stripped_everywhere() {
        assert_eq!(RepoName::new("f/o\\o/").as_str(), "foo");
    }

    #[test]
    fn test_separator_only_token_becomes_empty() {
        let name = RepoName::new("/\\");
        assert!(name.is_empty());
    }
}
