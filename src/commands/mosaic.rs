//! # mosaic 命令实现
//!
//! 批量应用块平均马赛克。
//!
//! ## 依赖关系
//! - 使用 `cli/mosaic.rs` 定义的参数
//! - 使用 `commands/mod.rs` 的共享流水线

use crate::cli::mosaic::MosaicArgs;
use crate::error::Result;
use crate::transforms::Transform;

/// 执行 mosaic 命令
pub fn execute(args: MosaicArgs) -> Result<()> {
    // block_size >= 1 已由 clap 的范围校验保证
    super::run_batch(
        &args.batch,
        Transform::Mosaic {
            block_size: args.block_size,
        },
    )
}
