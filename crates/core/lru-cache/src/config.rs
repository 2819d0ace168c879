//! 缓存配置
//!
//! 配置只在构造时读取一次，之后容量不可变。

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

/// 默认容量（条目数）
pub const DEFAULT_CAPACITY: usize = 1024;

/// 默认缓存名称，用于日志
pub const DEFAULT_NAME: &str = "lru";

/// 缓存配置
///
/// 可以从 TOML 文本加载，缺失的字段取默认值：
///
/// ```
/// use lru_cache::CacheConfig;
///
/// let config = CacheConfig::from_toml_str("capacity = 64\nname = \"sessions\"").unwrap();
/// assert_eq!(config.capacity, 64);
/// assert_eq!(config.name, "sessions");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// 最大条目数；0 表示不保存任何条目
    pub capacity: usize,
    /// 缓存名称
    pub name: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl CacheConfig {
    /// 创建指定容量的配置
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// 设置缓存名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 从 TOML 文本解析并校验配置
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CacheConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    ///
    /// 容量为 0 是合法配置。
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CacheError::InvalidConfig {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.name, DEFAULT_NAME);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = CacheConfig::from_toml_str("capacity = 3").unwrap();
        assert_eq!(config, CacheConfig::new(3));

        let config = CacheConfig::from_toml_str("").unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_zero_capacity_is_valid() {
        let config = CacheConfig::from_toml_str("capacity = 0").unwrap();
        assert_eq!(config.capacity, 0);
    }

    #[test]
    fn test_malformed_toml() {
        let err = CacheConfig::from_toml_str("capacity = ").unwrap_err();
        assert!(matches!(err, CacheError::ConfigParse(_)));
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let err = CacheConfig::from_toml_str("capacity = -1").unwrap_err();
        assert!(matches!(err, CacheError::ConfigParse(_)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = CacheConfig::from_toml_str("name = \"  \"").unwrap_err();
        match err {
            CacheError::InvalidConfig { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_name() {
        let config = CacheConfig::new(8).with_name("hot-keys");
        assert_eq!(config.name, "hot-keys");
        assert_eq!(config.capacity, 8);
    }
}
