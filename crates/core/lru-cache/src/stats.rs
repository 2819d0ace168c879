//! 缓存统计

/// 核心结构内部的计数器，随结构一起受锁保护
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Counters {
    pub(crate) hits: u64,
    pub(crate) misses: u64,
    pub(crate) inserts: u64,
    pub(crate) updates: u64,
    pub(crate) evictions: u64,
    pub(crate) removals: u64,
}

/// 缓存统计信息快照
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// 命中次数（`get` 找到条目）
    pub hits: u64,
    /// 未命中次数
    pub misses: u64,
    /// 新键插入次数
    pub inserts: u64,
    /// 已有键的值替换次数
    pub updates: u64,
    /// 因容量不足被驱逐的条目数
    pub evictions: u64,
    /// 通过 `remove` 删除的条目数
    pub removals: u64,
    /// 快照时的条目数
    pub len: usize,
    /// 缓存容量
    pub capacity: usize,
}

impl CacheStats {
    pub(crate) fn new(counters: Counters, len: usize, capacity: usize) -> Self {
        Self {
            hits: counters.hits,
            misses: counters.misses,
            inserts: counters.inserts,
            updates: counters.updates,
            evictions: counters.evictions,
            removals: counters.removals,
            len,
            capacity,
        }
    }

    /// 获取缓存命中率
    ///
    /// 尚无查找时返回 0.0。
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// 生成统计报告
    pub fn report(&self) -> String {
        let usage = if self.capacity == 0 {
            0.0
        } else {
            self.len as f64 / self.capacity as f64 * 100.0
        };
        format!(
            r#"Cache Statistics:
  - Hits: {}
  - Misses: {}
  - Hit Rate: {:.2}%
  - Inserts: {} (updates: {})
  - Evictions: {}
  - Removals: {}
  - Entries: {} / {} ({:.1}% used)
"#,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.inserts,
            self.updates,
            self.evictions,
            self.removals,
            self.len,
            self.capacity,
            usage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_without_lookups() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let counters = Counters {
            hits: 3,
            misses: 1,
            ..Default::default()
        };
        let stats = CacheStats::new(counters, 2, 4);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_report_with_zero_capacity() {
        let stats = CacheStats::new(Counters::default(), 0, 0);
        let report = stats.report();
        assert!(report.contains("Entries: 0 / 0 (0.0% used)"));
        assert!(report.contains("Hit Rate: 0.00%"));
    }
}
