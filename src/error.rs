//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，覆盖监视核心的全部错误分类。
//! 本应用中没有致命错误：读取失败让当前轮询成为空操作，写入失败被
//! 调用方吞掉或原样返回，失效的选择只是提示前端刷新快照。
//! 任何错误发生后，历史与展示状态都保持完整，不存在半更新。
//!
//! 所有 `#[tauri::command]` 函数统一返回 `Result<T, AppError>`，
//! 前端通过 `Serialize` 获得结构化的错误信息。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 实现 `Serialize` 将错误序列化为字符串，满足 Tauri IPC 要求。

use serde::Serialize;

/// 应用级统一错误类型
///
/// 所有 Tauri command 均返回此类型，确保前端收到一致的错误格式。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 剪贴板中没有可用文本（非文本内容、空剪贴板或瞬时读取失败）
    #[error("剪贴板不可用")]
    ClipboardUnavailable,

    /// 剪贴板写入失败
    #[error("剪贴板写入失败: {0}")]
    ClipboardWrite(String),

    /// 恢复请求的下标相对当前历史已失效
    #[error("历史条目下标越界: {0}")]
    SelectionOutOfRange(usize),

    /// 历史记录为空，没有可恢复的条目
    #[error("历史记录为空")]
    EmptyHistory,

    /// 监视器状态锁获取失败
    #[error("状态锁获取失败: {0}")]
    State(String),
}

/// Tauri IPC 要求返回值实现 `Serialize`。
/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
