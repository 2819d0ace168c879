//! LRU 核心结构（不带锁）
//!
//! 键索引（`HashMap<K, SlotId>`）与访问顺序链表组合在一起，查找、插入、
//! 提升和驱逐都是 O(1)。所有修改都同时更新两个结构，保证键索引的键集合
//! 始终等于链表中的键集合。
//!
//! 本结构不做同步，只能通过 [`crate::LruCache`] 在锁内访问。

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

use crate::recency::{RecencyList, SlotId};
use crate::stats::{CacheStats, Counters};

/// 构造时最多预分配的条目数
const PREALLOC_LIMIT: usize = 4096;

pub(crate) struct LruCore<K, V> {
    index: HashMap<K, SlotId>,
    order: RecencyList<K, V>,
    capacity: usize,
    counters: Counters,
}

impl<K: Eq + Hash + Clone, V> LruCore<K, V> {
    pub(crate) fn new(capacity: usize) -> Self {
        let prealloc = capacity.min(PREALLOC_LIMIT);
        Self {
            index: HashMap::with_capacity(prealloc),
            order: RecencyList::with_capacity(prealloc),
            capacity,
            counters: Counters::default(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// 插入或替换条目
    ///
    /// 返回被挤出的条目：容量已满时为最久未使用的条目，容量为 0 时为
    /// 刚传入的条目本身。替换已有键时不会驱逐任何条目。
    pub(crate) fn set(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.index.get(&key) {
            self.order.replace_value(slot, value);
            self.order.move_to_front(slot);
            self.counters.updates += 1;
            return None;
        }

        if self.capacity == 0 {
            trace!("zero-capacity cache dropped a new entry");
            self.counters.evictions += 1;
            return Some((key, value));
        }

        let evicted = if self.order.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let slot = self.order.push_front(key.clone(), value);
        self.index.insert(key, slot);
        self.counters.inserts += 1;
        evicted
    }

    /// 驱逐链表尾部条目
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.order.pop_back()?;
        self.index.remove(&key);
        self.counters.evictions += 1;
        trace!(
            "evicted least recently used entry (len={}, capacity={})",
            self.order.len(),
            self.capacity
        );
        Some((key, value))
    }

    /// 查找条目并将其提升为最近使用
    ///
    /// 未命中时不改变顺序。
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&slot) = self.index.get(key) else {
            self.counters.misses += 1;
            return None;
        };
        self.counters.hits += 1;
        self.order.move_to_front(slot);
        self.order.value(slot)
    }

    /// 查找条目但不改变顺序，也不计入命中统计
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .and_then(|&slot| self.order.value(slot))
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// 删除条目，键不存在时不做任何事
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(key)?;
        let removed = self.order.remove(slot);
        if removed.is_some() {
            self.counters.removals += 1;
        }
        removed
    }

    /// 清空所有条目，返回被清除的条目数
    pub(crate) fn clear(&mut self) -> usize {
        let dropped = self.order.len();
        self.index.clear();
        self.order.clear();
        dropped
    }

    /// 按最近使用到最久未使用的顺序返回键
    pub(crate) fn keys(&self) -> Vec<K> {
        self.order.iter().map(|(k, _)| k.clone()).collect()
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats::new(self.counters, self.len(), self.capacity)
    }

    /// 检查键索引与链表是否一致
    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.order.len());
        assert!(self.order.len() <= self.capacity);
        for (key, _) in self.order.iter() {
            let slot = self.index.get(key).expect("list key missing from index");
            assert!(self.order.value(*slot).is_some());
        }
    }
}
