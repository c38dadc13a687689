//! # resize 命令实现
//!
//! 批量按百分比缩放。
//!
//! ## 依赖关系
//! - 使用 `cli/resize.rs` 定义的参数
//! - 使用 `commands/mod.rs` 的共享流水线

use crate::cli::resize::ResizeArgs;
use crate::error::Result;
use crate::transforms::Transform;

/// 执行 resize 命令
pub fn execute(args: ResizeArgs) -> Result<()> {
    // percentage >= 1 已由 clap 的范围校验保证；过小的百分比
    // 在单文件变换阶段以退化尺寸错误形式报告
    super::run_batch(
        &args.batch,
        Transform::Resize {
            percentage: args.percentage,
        },
    )
}
