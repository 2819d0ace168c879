//! 访问顺序链表
//!
//! 基于槽位数组（arena）的双向链表：节点存放在 `Vec` 中，通过槽位下标
//! 互相链接，头部为最近使用的条目，尾部为最久未使用的条目。
//! 被删除的槽位进入空闲列表，之后的插入会复用它们，因此已分配的槽位数
//! 不会超过历史最大条目数。

/// 槽位下标
pub(crate) type SlotId = usize;

/// 链表节点
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// 按访问顺序排列的双向链表
#[derive(Debug)]
pub(crate) struct RecencyList<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    /// 创建空链表并预留 `capacity` 个槽位
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    fn node(&self, slot: SlotId) -> Option<&Node<K, V>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: SlotId) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// 分配槽位（优先复用空闲槽位）
    fn alloc(&mut self, node: Node<K, V>) -> SlotId {
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = Some(node);
            slot
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    /// 将节点从链中摘下，节点本身仍留在槽位中
    fn unlink(&mut self, slot: SlotId) {
        let Some((prev, next)) = self.node(slot).map(|n| (n.prev, n.next)) else {
            return;
        };

        if let Some(p) = prev {
            if let Some(prev_node) = self.node_mut(p) {
                prev_node.next = next;
            }
        } else {
            self.head = next;
        }
        if let Some(n) = next {
            if let Some(next_node) = self.node_mut(n) {
                next_node.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        if let Some(node) = self.node_mut(slot) {
            node.prev = None;
            node.next = None;
        }
    }

    /// 将已摘下的节点挂到链表头部
    fn link_front(&mut self, slot: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(slot) {
            node.prev = None;
            node.next = old_head;
        } else {
            return;
        }

        // 旧头节点的 prev 必须回指新头节点，否则反向链会断开
        if let Some(head_node) = old_head.and_then(|h| self.node_mut(h)) {
            head_node.prev = Some(slot);
        }

        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }

    /// 在头部插入新条目，返回其槽位
    pub(crate) fn push_front(&mut self, key: K, value: V) -> SlotId {
        let slot = self.alloc(Node {
            key,
            value,
            prev: None,
            next: None,
        });
        self.link_front(slot);
        self.len += 1;
        slot
    }

    /// 将条目移动到头部
    ///
    /// 条目已在头部时不做任何改动。
    pub(crate) fn move_to_front(&mut self, slot: SlotId) {
        if self.head == Some(slot) || self.node(slot).is_none() {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    /// 删除条目并返回其键值
    pub(crate) fn remove(&mut self, slot: SlotId) -> Option<(K, V)> {
        self.node(slot)?;
        self.unlink(slot);
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        self.len -= 1;
        Some((node.key, node.value))
    }

    /// 弹出尾部（最久未使用）条目
    pub(crate) fn pop_back(&mut self) -> Option<(K, V)> {
        let tail = self.tail?;
        self.remove(tail)
    }

    pub(crate) fn value(&self, slot: SlotId) -> Option<&V> {
        self.node(slot).map(|n| &n.value)
    }

    /// 替换槽位中的值，返回旧值；不改变顺序
    pub(crate) fn replace_value(&mut self, slot: SlotId, value: V) -> Option<V> {
        self.node_mut(slot)
            .map(|n| std::mem::replace(&mut n.value, value))
    }

    /// 清空链表，释放所有槽位
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// 从头（最近使用）到尾（最久未使用）遍历
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

/// 正向迭代器
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
