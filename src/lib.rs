//! # 剪贴板监视工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  前端 (静态 HTML/JS)                      │
//! │                                                          │
//! │   只读查看器 ── 历史面板 ── 恢复 / 清空按钮               │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ Tauri IPC (Result<T, AppError>) + clipboard-changed 事件
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            后端 (Rust)                           │
//! │                                                          │
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  │                                                       │
//! │  ├─ clipboard ── ClipboardPort 契约 + arboard 实现        │
//! │  │                                                       │
//! │  ├─ preview ──── 单行预览格式化 (纯函数)                  │
//! │  ├─ history ──── 去重·定容·按新近排序的历史存储           │
//! │  ├─ watcher ──── 定时轮询 + 变化检测 + 展示状态           │
//! │  └─ restore ──── 恢复选中条目 / 清空展示                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，所有 Tauri command 的返回类型 |
//! | [`clipboard`] | 系统剪贴板的读写契约与 `arboard` 实现 |
//! | [`preview`] | 历史条目的单行、限长、无换行预览 |
//! | [`history`] | 有序、去重、容量受限的历史存储 |
//! | [`watcher`] | 固定间隔轮询、变化检测、展示状态与历史快照 |
//! | [`restore`] | 恢复历史条目到剪贴板、清空当前展示 |

pub mod error;
pub mod clipboard;
pub mod preview;
pub mod history;
pub mod watcher;
pub mod restore;
