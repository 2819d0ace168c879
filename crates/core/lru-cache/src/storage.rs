//! 键值存储接口
//!
//! 调用方可以依赖 [`Storage`] 而不是具体的缓存类型。

use std::hash::Hash;

use crate::cache::LruCache;

/// 键值存储
///
/// 所有操作都是全函数：键不存在通过 `get` 返回 `None` 表达，
/// `set` 与 `remove` 不会失败。
pub trait Storage<K, V> {
    /// 插入或替换条目
    fn set(&self, key: K, value: V);

    /// 查找条目
    fn get(&self, key: &K) -> Option<V>;

    /// 删除条目
    fn remove(&self, key: &K);

    /// 当前条目数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Storage<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn set(&self, key: K, value: V) {
        LruCache::set(self, key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        LruCache::get(self, key)
    }

    fn remove(&self, key: &K) {
        LruCache::remove(self, key);
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }
}
