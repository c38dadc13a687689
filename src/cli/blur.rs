//! # blur 子命令 CLI 定义
//!
//! 批量应用高斯模糊。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/blur.rs`

use super::BatchOpts;
use clap::Args;

/// blur 子命令参数
#[derive(Args, Debug)]
pub struct BlurArgs {
    /// Blur strength (Gaussian sigma); 0 leaves images untouched
    #[arg(short, long, default_value_t = 5.0)]
    pub strength: f32,

    #[command(flatten)]
    pub batch: BatchOpts,
}
