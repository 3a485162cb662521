//! 剪贴板监视模块
//!
//! # 设计思路
//!
//! 以固定间隔轮询系统剪贴板，检测到新文本时更新展示状态并写入历史。
//! 监视器只在"等待下一次轮询"和"执行一次瞬时读取"之间往复，
//! 启动后一直运行到进程退出；单次读取失败不会中断轮询节奏。
//!
//! # 实现思路
//!
//! - 展示状态用 `Option<String>` 表达："尚未观察到任何内容"的哨兵值
//!   （`None`）与包括空串在内的一切真实值都不相等，因此启动后第一次
//!   成功读取必然被当作变化记录下来。
//! - 单次轮询的判定提炼为 `on_tick`，返回 `TickOutcome` 便于单元测试；
//!   轮询循环只负责调度、取锁与事件广播。
//! - 历史以不可变快照（`Vec<HistoryEntry>`）暴露给前端，选择以下标
//!   表达并在操作时刻重新校验，前端不会持有任何活引用。
//! - 轮询任务通过 `tauri::async_runtime::spawn` 运行，`tokio` 定时器
//!   取 `MissedTickBehavior::Delay`，错过的 tick 不补发。

use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager, State};
use tokio::time::{self, MissedTickBehavior};

use crate::clipboard::{ClipboardPort, SystemClipboard};
use crate::error::AppError;
use crate::history::HistoryStore;
use crate::preview::format_preview;

/// 轮询间隔（毫秒）
pub const POLL_INTERVAL_MS: u64 = 500;

/// 单次轮询的结果
#[derive(Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// 读到了与当前展示内容不同的文本，状态已更新
    Changed,
    /// 读到的文本与当前展示内容一致，本次轮询为空操作
    Unchanged,
    /// 剪贴板不可用，本次轮询为空操作
    Unavailable,
}

/// 历史条目的 IPC 快照
///
/// `index` 是条目在快照中的位置，前端恢复时原样传回，
/// 由后端对当时的存储重新校验。
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub index: usize,
    pub text: String,
    pub preview: String,
}

/// 剪贴板监视器：展示状态 + 历史存储
///
/// 展示内容逐字保存，不截断、不去重；截断与去重只发生在
/// 历史及其预览上。
#[derive(Debug, Default)]
pub struct ClipboardWatcher {
    display: Option<String>,
    history: HistoryStore,
}

impl ClipboardWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 执行一次轮询
    ///
    /// 读取失败或内容与当前展示一致时不改动任何状态；
    /// 读到新文本时先更新展示，再写入历史。
    pub fn on_tick(&mut self, port: &dyn ClipboardPort) -> TickOutcome {
        let text = match port.read() {
            Ok(text) => text,
            Err(_) => return TickOutcome::Unavailable,
        };

        if self.display.as_deref() == Some(text.as_str()) {
            return TickOutcome::Unchanged;
        }

        self.display = Some(text.clone());
        self.history.push(text);
        TickOutcome::Changed
    }

    /// 当前展示文本；尚未观察到任何内容时为空串
    pub fn display_text(&self) -> String {
        self.display.clone().unwrap_or_default()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub(crate) fn set_display(&mut self, text: String) {
        self.display = Some(text);
    }

    pub(crate) fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    /// 历史的不可变快照，用于渲染与下标校验
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.history
            .entries()
            .iter()
            .enumerate()
            .map(|(index, text)| HistoryEntry {
                index,
                text: text.clone(),
                preview: format_preview(text),
            })
            .collect()
    }
}

// ============================================================================
// 监视器状态（Tauri Managed State）
// ============================================================================

/// 监视器状态封装，由 Tauri 托管
pub struct MonitorState(pub Mutex<ClipboardWatcher>);

pub(crate) fn with_watcher<T>(
    state: &State<'_, MonitorState>,
    op: impl FnOnce(&mut ClipboardWatcher) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut watcher = state
        .0
        .lock()
        .map_err(|e| AppError::State(format!("获取监视器状态锁失败: {}", e)))?;
    op(&mut watcher)
}

// ============================================================================
// 轮询任务
// ============================================================================

/// 剪贴板变化事件的负载
///
/// 前端通过 `source` 字段区分变化来源。
#[derive(Serialize, Clone)]
struct ClipboardEventPayload {
    /// 变化来源：`"external"` 表示外部应用
    source: &'static str,
}

/// 在后台启动剪贴板轮询
///
/// 任务与进程同生共死：无论单次读取成败，都按固定间隔继续轮询。
/// 检测到变化时通过 Tauri 事件通知前端刷新。
pub fn start_polling(app: AppHandle) {
    tauri::async_runtime::spawn(async move {
        let port = SystemClipboard;
        let mut ticker = time::interval(Duration::from_millis(POLL_INTERVAL_MS));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        log::info!("📋 剪贴板轮询已启动，间隔 {}ms", POLL_INTERVAL_MS);

        loop {
            ticker.tick().await;

            let state = app.state::<MonitorState>();
            let outcome = {
                let mut watcher = match state.0.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => {
                        log::warn!("监视器状态锁中毒，继续使用恢复数据");
                        poisoned.into_inner()
                    }
                };
                watcher.on_tick(&port)
            };

            if outcome == TickOutcome::Changed {
                log::debug!("📋 检测到剪贴板变化");
                if let Err(err) = app.emit(
                    "clipboard-changed",
                    ClipboardEventPayload { source: "external" },
                ) {
                    log::warn!("发送剪贴板变化事件失败: {}", err);
                }
            }
        }
    });
}

// ============================================================================
// Tauri Commands
// ============================================================================

#[tauri::command]
pub fn get_display_text(state: State<'_, MonitorState>) -> Result<String, AppError> {
    with_watcher(&state, |watcher| Ok(watcher.display_text()))
}

#[tauri::command]
pub fn get_history(state: State<'_, MonitorState>) -> Result<Vec<HistoryEntry>, AppError> {
    with_watcher(&state, |watcher| Ok(watcher.snapshot()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeClipboard {
        content: RefCell<Option<String>>,
    }

    impl FakeClipboard {
        fn holding(text: &str) -> Self {
            Self {
                content: RefCell::new(Some(text.to_string())),
            }
        }

        fn unavailable() -> Self {
            Self {
                content: RefCell::new(None),
            }
        }

        fn set(&self, text: &str) {
            *self.content.borrow_mut() = Some(text.to_string());
        }
    }

    impl ClipboardPort for FakeClipboard {
        fn read(&self) -> Result<String, AppError> {
            self.content
                .borrow()
                .clone()
                .ok_or(AppError::ClipboardUnavailable)
        }

        fn write(&self, text: &str) -> Result<(), AppError> {
            self.set(text);
            Ok(())
        }
    }

    #[test]
    fn test_first_read_counts_as_change() {
        let mut watcher = ClipboardWatcher::new();
        let port = FakeClipboard::holding("hello");

        assert_eq!(watcher.on_tick(&port), TickOutcome::Changed);
        assert_eq!(watcher.display_text(), "hello");
        assert_eq!(watcher.history().entries(), ["hello"]);
    }

    #[test]
    fn test_repeated_read_is_idempotent() {
        let mut watcher = ClipboardWatcher::new();
        let port = FakeClipboard::holding("hello");

        watcher.on_tick(&port);
        assert_eq!(watcher.on_tick(&port), TickOutcome::Unchanged);
        assert_eq!(watcher.history().len(), 1);
    }

    #[test]
    fn test_unavailable_read_changes_nothing() {
        let mut watcher = ClipboardWatcher::new();
        let port = FakeClipboard::unavailable();

        assert_eq!(watcher.on_tick(&port), TickOutcome::Unavailable);
        assert_eq!(watcher.display_text(), "");
        assert!(watcher.history().is_empty());
    }

    #[test]
    fn test_first_read_of_empty_text_updates_display_only() {
        let mut watcher = ClipboardWatcher::new();
        let port = FakeClipboard::holding("");

        assert_eq!(watcher.on_tick(&port), TickOutcome::Changed);
        assert_eq!(watcher.display_text(), "");
        assert!(watcher.history().is_empty());

        // 空串已成为当前展示值，重复读取不再算变化
        assert_eq!(watcher.on_tick(&port), TickOutcome::Unchanged);
    }

    #[test]
    fn test_observed_sequence_keeps_most_recent_first() {
        let mut watcher = ClipboardWatcher::new();
        let port = FakeClipboard::holding("A");

        watcher.on_tick(&port);
        port.set("B");
        watcher.on_tick(&port);
        port.set("A");
        watcher.on_tick(&port);
        port.set("C");
        watcher.on_tick(&port);

        assert_eq!(watcher.history().entries(), ["C", "A", "B"]);
        assert_eq!(watcher.display_text(), "C");
    }

    #[test]
    fn test_snapshot_carries_index_and_preview() {
        let mut watcher = ClipboardWatcher::new();
        let port = FakeClipboard::holding("line1\r\nline2");

        watcher.on_tick(&port);
        let snapshot = watcher.snapshot();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].index, 0);
        assert_eq!(snapshot[0].text, "line1\r\nline2");
        assert_eq!(snapshot[0].preview, "line1 ⏎ line2");
    }

    #[test]
    fn test_history_entry_serializes_for_ipc() {
        let entry = HistoryEntry {
            index: 3,
            text: "a\nb".to_string(),
            preview: "a ⏎ b".to_string(),
        };

        let json = serde_json::to_value(&entry).expect("serialize entry");

        assert_eq!(json["index"], 3);
        assert_eq!(json["text"], "a\nb");
        assert_eq!(json["preview"], "a ⏎ b");
    }
}
