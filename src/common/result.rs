//! gitp共通のResult型

use crate::common::error::GitpError;

/// gitpプロジェクト全体で使用するResult型のエイリアス
///
/// このエイリアスにより、プロジェクト全体で一貫したエラーハンドリングが可能になる。
///
/// # Examples
///
/// ```
/// use gitp::common::result::GitpResult;
/// use gitp::common::error::GitpError;
///
/// fn example_function() -> GitpResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> GitpResult<()> {
///     Err(GitpError::invalid_argument())
/// }
/// ```
pub type GitpResult<T> = Result<T, GitpError>;
