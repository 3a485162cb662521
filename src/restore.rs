//! 恢复与清空模块
//!
//! 把用户选中的历史条目写回系统剪贴板并同步展示状态，
//! 以及"清空当前展示"这一监视器的唯一外部清除入口。
//!
//! 下标针对操作时刻的历史校验：历史可能在用户选择之后因为新的
//! 剪贴板变化而重排或收缩，失效的选择是明确的空操作信号，
//! 而不是悬空引用。

use tauri::State;

use crate::clipboard::{ClipboardPort, SystemClipboard};
use crate::error::AppError;
use crate::watcher::{ClipboardWatcher, MonitorState, with_watcher};

/// 把指定历史条目恢复到剪贴板
///
/// `index` 省略时默认恢复最近一条（下标 0）。成功后该条目被移动到
/// 历史队首，与外部变化遵循同一条"最近见到"规则。
///
/// 历史为空返回 [`AppError::EmptyHistory`]，下标失效返回
/// [`AppError::SelectionOutOfRange`]；写入失败时展示状态与历史
/// 保持原样，错误原样返回。
pub fn restore(
    watcher: &mut ClipboardWatcher,
    index: Option<usize>,
    port: &dyn ClipboardPort,
) -> Result<String, AppError> {
    if watcher.history().is_empty() {
        return Err(AppError::EmptyHistory);
    }

    let index = index.unwrap_or(0);
    let text = watcher
        .history()
        .get(index)
        .ok_or(AppError::SelectionOutOfRange(index))?
        .to_string();

    port.write(&text)?;

    watcher.set_display(text.clone());
    watcher.history_mut().push(text.clone());
    Ok(text)
}

/// 清空当前展示
///
/// 对剪贴板做尽力而为的清空写入，失败只记日志不上抛；
/// 无论写入成败，展示内容都会被置空。历史不受影响。
pub fn clear(watcher: &mut ClipboardWatcher, port: &dyn ClipboardPort) {
    if let Err(err) = port.write("") {
        log::warn!("清空剪贴板失败，仅清空展示内容: {}", err);
    }
    watcher.set_display(String::new());
}

// ============================================================================
// Tauri Commands
// ============================================================================

#[tauri::command]
pub fn restore_entry(
    state: State<'_, MonitorState>,
    index: Option<usize>,
) -> Result<String, AppError> {
    with_watcher(&state, |watcher| restore(watcher, index, &SystemClipboard))
}

#[tauri::command]
pub fn clear_display(state: State<'_, MonitorState>) -> Result<(), AppError> {
    with_watcher(&state, |watcher| {
        clear(watcher, &SystemClipboard);
        Ok(())
    })
}
