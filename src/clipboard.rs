//! 剪贴板访问模块
//!
//! 通过 `ClipboardPort` 把系统剪贴板抽象成可注入的协作者：
//! 监视与恢复逻辑只依赖该契约，测试时可以换成确定性的假剪贴板。
//!
//! 真实实现 `SystemClipboard` 基于 `arboard`，每次操作新建一个
//! `arboard::Clipboard`。读写都是快速有界的单次调用，失败立即返回，
//! 不做重试或退避。

use crate::error::AppError;

/// 系统剪贴板的读写契约
///
/// - `read`：返回当前纯文本内容。非文本内容、空剪贴板或瞬时平台错误
///   一律映射为 [`AppError::ClipboardUnavailable`]。
/// - `write`：尽力写入。失败映射为 [`AppError::ClipboardWrite`]，
///   是否吞掉由调用方决定。
pub trait ClipboardPort: Send {
    fn read(&self) -> Result<String, AppError>;
    fn write(&self, text: &str) -> Result<(), AppError>;
}

/// 基于 `arboard` 的系统剪贴板
pub struct SystemClipboard;

impl ClipboardPort for SystemClipboard {
    fn read(&self) -> Result<String, AppError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| AppError::ClipboardUnavailable)?;
        clipboard.get_text().map_err(|err| {
            log::debug!("📋 剪贴板无可用文本: {}", err);
            AppError::ClipboardUnavailable
        })
    }

    fn write(&self, text: &str) -> Result<(), AppError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| AppError::ClipboardWrite(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| AppError::ClipboardWrite(e.to_string()))
    }
}
