//! 单行预览格式化模块
//!
//! # 设计思路
//!
//! 历史面板的每一行都是定宽单行文本，而剪贴板内容可能是任意多行。
//! 本模块提供纯函数，把原始文本折叠成受长度约束的单行预览：
//! 换行统一替换为可见的折行标记，超长部分截断并以省略号收尾。
//!
//! # 实现思路
//!
//! - 按 `\r\n`、`\r`、`\n` 的顺序替换，避免 `\r\n` 被拆成两个标记。
//! - 截断按字符（`char`）计数而不按字节，多字节文本不会被截成半个码点。

/// 预览的最大显示长度（字符数）
pub const PREVIEW_MAX_LEN: usize = 100;

/// 换行在单行预览中的可见标记（前后各留一个空格）
const LINE_BREAK_MARKER: &str = " ⏎ ";

/// 把任意文本折叠成单行预览
///
/// 输出保证不含任何原始换行符，且字符数不超过 [`PREVIEW_MAX_LEN`]：
/// 超长时截断到 `PREVIEW_MAX_LEN - 1` 个字符并补一个省略号。
pub fn format_preview(text: &str) -> String {
    let flat = text
        .replace("\r\n", LINE_BREAK_MARKER)
        .replace('\r', LINE_BREAK_MARKER)
        .replace('\n', LINE_BREAK_MARKER);

    if flat.chars().count() <= PREVIEW_MAX_LEN {
        return flat;
    }

    let truncated: String = flat.chars().take(PREVIEW_MAX_LEN - 1).collect();
    format!("{}…", truncated)
}
