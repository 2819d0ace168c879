//! 线程安全的 LRU 缓存
//!
//! 核心结构整体放在一把互斥锁之后。每个公开操作从查找键开始到完成
//! 结构修改为止都持有同一把锁，因此"查找 + 修改"对同一个键是原子的，
//! 并发调用的效果等价于某种顺序执行。

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use log::debug;
use parking_lot::Mutex;

use crate::config::CacheConfig;
use crate::lru::LruCore;
use crate::stats::CacheStats;

/// 固定容量的 LRU 缓存
///
/// 可以通过 `Arc` 在多个线程之间共享。
///
/// ```
/// use lru_cache::LruCache;
///
/// let cache = LruCache::new(2);
/// cache.set("a", 1);
/// cache.set("b", 2);
/// assert_eq!(cache.get("a"), Some(1));
///
/// // "b" 现在是最久未使用的条目
/// cache.set("c", 3);
/// assert_eq!(cache.get("b"), None);
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<K, V> {
    inner: Mutex<LruCore<K, V>>,
    name: String,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    /// 创建指定容量的空缓存
    ///
    /// 容量为 0 的缓存不会保存任何条目。
    pub fn new(capacity: usize) -> Self {
        Self::from_config(&CacheConfig::new(capacity))
    }

    /// 按配置创建空缓存
    pub fn from_config(config: &CacheConfig) -> Self {
        debug!(
            "creating LRU cache '{}' with capacity {}",
            config.name, config.capacity
        );
        Self {
            inner: Mutex::new(LruCore::new(config.capacity)),
            name: config.name.clone(),
        }
    }

    /// 缓存名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 插入或替换条目，并将其标记为最近使用
    ///
    /// 键不存在且缓存已满时，先驱逐最久未使用的条目。
    pub fn set(&self, key: K, value: V) {
        let displaced = self.inner.lock().set(key, value);
        // 在锁外释放被挤出的条目
        drop(displaced);
    }

    /// 删除条目；键不存在时不做任何事
    pub fn remove<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.inner.lock().remove(key);
        drop(removed);
    }

    /// 当前条目数
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 构造时设定的容量
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// 检查键是否存在，不改变访问顺序
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    /// 清空缓存，容量保持不变
    pub fn clear(&self) {
        let dropped = self.inner.lock().clear();
        debug!("cleared LRU cache '{}' ({} entries)", self.name, dropped);
    }

    /// 按最近使用到最久未使用的顺序返回键的快照
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys()
    }

    /// 获取统计信息快照
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    /// 查找条目，命中时将其标记为最近使用
    ///
    /// 未命中返回 `None`，且不改变访问顺序。
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().get(key).cloned()
    }

    /// 查找条目但不改变访问顺序
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().peek(key).cloned()
    }
}

impl<K: Eq + Hash + Clone, V> Default for LruCache<K, V> {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.lock();
        f.debug_struct("LruCache")
            .field("name", &self.name)
            .field("len", &core.len())
            .field("capacity", &core.capacity())
            .finish()
    }
}
