//! # blur 命令实现
//!
//! 批量应用高斯模糊。
//!
//! ## 依赖关系
//! - 使用 `cli/blur.rs` 定义的参数
//! - 使用 `commands/mod.rs` 的共享流水线

use crate::cli::blur::BlurArgs;
use crate::error::{PixbatchError, Result};
use crate::transforms::Transform;
use crate::utils::output;

/// 界面侧对模糊强度的约定上限，策略本身不设上限
const MAX_STRENGTH: f32 = 100.0;

/// 执行 blur 命令
pub fn execute(args: BlurArgs) -> Result<()> {
    if !args.strength.is_finite() || args.strength < 0.0 {
        return Err(PixbatchError::InvalidArgument(format!(
            "Blur strength must be a non-negative number, got {}",
            args.strength
        )));
    }

    let strength = if args.strength > MAX_STRENGTH {
        output::print_warning(&format!(
            "Blur strength {} clamped to {}",
            args.strength, MAX_STRENGTH
        ));
        MAX_STRENGTH
    } else {
        args.strength
    };

    super::run_batch(&args.batch, Transform::Blur { strength })
}
