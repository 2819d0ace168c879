//! 缓存错误类型
//!
//! 缓存操作本身不会失败，错误只来自配置的解析与校验。

use thiserror::Error;

/// 缓存错误
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to parse cache configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid cache configuration field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// 本 crate 的 Result 类型
pub type Result<T> = std::result::Result<T, CacheError>;
