//! # resize 子命令 CLI 定义
//!
//! 批量按百分比缩放。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/resize.rs`

use super::BatchOpts;
use clap::Args;

/// resize 子命令参数
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Target size as a percentage of the original (values above 100 upscale)
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub percentage: u32,

    #[command(flatten)]
    pub batch: BatchOpts,
}
