// 防止在 Windows 发布版本中显示额外的控制台窗口，不要删除！
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! # 剪贴板监视工具 — 应用入口
//!
//! 本文件仅负责应用初始化与命令注册。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::sync::Mutex;

use clipboard_monitor::watcher::{ClipboardWatcher, MonitorState};
use clipboard_monitor::{restore, watcher};
use tauri::Manager;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .setup(|app| {
            log::info!("setup: begin");

            // 监视器状态在启动时创建一次，存活到进程退出
            app.manage(MonitorState(Mutex::new(ClipboardWatcher::new())));
            log::info!("setup: monitor state managed");

            // 启动剪贴板轮询
            watcher::start_polling(app.handle().clone());
            log::info!("setup: clipboard polling stage done");

            log::info!("setup: complete");
            Ok(())
        })
        // 注册所有 Tauri 命令
        .invoke_handler(tauri::generate_handler![
            // 展示与历史快照
            watcher::get_display_text,
            watcher::get_history,
            // 恢复与清空
            restore::restore_entry,
            restore::clear_display,
        ])
        .run(tauri::generate_context!())
        .expect("运行 Tauri 应用时出错");
}
