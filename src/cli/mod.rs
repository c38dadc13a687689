//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `blur`: 高斯模糊
//! - `mosaic`: 块平均马赛克
//! - `resize`: 按百分比缩放
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: blur, mosaic, resize

pub mod blur;
pub mod mosaic;
pub mod resize;

use clap::{Args, Parser, Subcommand};

/// Pixbatch - 批量图像处理工具箱
#[derive(Parser)]
#[command(name = "pixbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A batch image transform toolkit (blur / mosaic / resize)", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Apply a Gaussian blur to the selected images
    Blur(blur::BlurArgs),

    /// Apply a block-average mosaic to the selected images
    Mosaic(mosaic::MosaicArgs),

    /// Resize the selected images by a percentage
    Resize(resize::ResizeArgs),
}

/// 所有子命令共享的批处理参数
#[derive(Args, Debug)]
pub struct BatchOpts {
    /// Image files and/or directories to process (directories are walked
    /// recursively; brace-delimited drag-and-drop strings are accepted)
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Overwrite the original files in place (destructive, asks for
    /// confirmation) instead of writing into a sibling folder
    #[arg(long, default_value_t = false)]
    pub in_place: bool,

    /// Name of the sibling output folder (default: named after the operation)
    #[arg(long, conflicts_with = "in_place")]
    pub folder: Option<String>,

    /// Number of parallel jobs (1 = sequential, 0 = auto)
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Skip the confirmation prompt before an in-place run
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}
