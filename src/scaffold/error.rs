//! Error taxonomy for scaffold generation.

use thiserror::Error;

/// The only failure kind: something went wrong while building file
/// contents. A missing component name is not an error - it selects list
/// mode instead. Generation is pure and deterministic, so a failing input
/// fails identically on retry; nothing here is retryable.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Generation failed, carrying the underlying message.
    #[error("生成组件代码失败: {0}")]
    Generation(String),
    /// Generation failed without a usable message.
    #[error("生成组件代码失败：未知错误")]
    Unknown,
}
