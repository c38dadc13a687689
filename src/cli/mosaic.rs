//! # mosaic 子命令 CLI 定义
//!
//! 批量应用块平均马赛克。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/mosaic.rs`

use super::BatchOpts;
use clap::Args;

/// mosaic 子命令参数
#[derive(Args, Debug)]
pub struct MosaicArgs {
    /// Side length of the mosaic blocks in pixels; 1 leaves images untouched
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub block_size: u32,

    #[command(flatten)]
    pub batch: BatchOpts,
}
