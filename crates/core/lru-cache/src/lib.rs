//! 固定容量的 LRU 键值缓存
//!
//! 本 crate 提供一个线程安全的内存缓存，容量以条目数计，满时驱逐最久
//! 未使用（LRU）的条目。
//!
//! ## 结构
//!
//! - 访问顺序链表：槽位数组上的双向链表，头部为最近使用的条目
//! - 键索引：键到槽位下标的哈希表
//! - 一把互斥锁：包住上面两个结构，所有操作在锁内完整执行
//!
//! 查找、插入、提升和驱逐均为 O(1)。
//!
//! ## 使用示例
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use lru_cache::{LruCache, Storage};
//!
//! let cache = Arc::new(LruCache::new(3));
//! cache.set("a".to_string(), 1);
//! cache.set("b".to_string(), 2);
//! cache.set("c".to_string(), 3);
//!
//! // 读取 "a" 会把它提升为最近使用
//! assert_eq!(cache.get("a"), Some(1));
//!
//! let writer = {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || cache.set("d".to_string(), 4))
//! };
//! writer.join().unwrap();
//!
//! // "b" 是最久未使用的条目，已被驱逐
//! assert_eq!(cache.get("b"), None);
//! assert_eq!(Storage::len(&*cache), 3);
//! ```

pub mod cache;
pub mod config;
pub mod error;
mod lru;
mod recency;
pub mod stats;
pub mod storage;

// 重新导出主要类型
pub use cache::LruCache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use stats::CacheStats;
pub use storage::Storage;
