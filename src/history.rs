//! 历史记录存储模块
//!
//! # 设计思路
//!
//! 维护一个有序、去重、容量受限的"最近见到"文本列表：
//! - **去重**：相同文本再次入列时不产生重复条目，而是被移动到队首
//!   （move-to-front）。用户反复复制同一个值是常见场景，去重让历史
//!   始终由彼此不同的最近值组成，而不是被重复项刷屏。
//! - **容量**：超出容量时从队尾淘汰最旧的条目。
//! - **空串**：空字符串永远不会入列。
//!
//! # 实现思路
//!
//! - 底层为 `Vec<String>`，下标 0 恒为最近一次 push 的条目。
//! - `push` 先按值移除已有的相等条目，再插入队首，最后收缩到容量上限。
//! - 历史仅存活于进程生命周期内，不做持久化。

/// 历史记录的默认容量上限（条目数）
pub const HISTORY_CAPACITY: usize = 100;

/// 有序、去重、容量受限的剪贴板历史
#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<String>,
    capacity: usize,
}

impl HistoryStore {
    /// 以默认容量 [`HISTORY_CAPACITY`] 创建空历史
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// 以指定容量创建空历史
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// 记录一条文本
    ///
    /// 空串为空操作。已存在的相等条目会被移动到队首而不是重复插入；
    /// 插入后超出容量时从队尾淘汰最旧的条目。
    pub fn push(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        if let Some(pos) = self.entries.iter().position(|entry| *entry == text) {
            self.entries.remove(pos);
        }
        self.entries.insert(0, text);
        self.entries.truncate(self.capacity);
    }

    /// 全量有序视图，下标 0 为最近条目
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 按下标取条目，越界返回 `None`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
