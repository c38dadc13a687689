//! # Pixbatch - 批量图像处理工具箱
//!
//! 将原本的单窗口图像处理小工具重构为命令行批处理程序。
//!
//! ## 子命令
//! - `blur`   - 高斯模糊
//! - `mosaic` - 块平均马赛克
//! - `resize` - 按百分比缩放
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── batch/      (文件收集与批量执行)
//!   ├── transforms/ (像素变换策略)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod transforms;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
