//! # 百分比缩放策略
//!
//! 两个维度独立按 `floor(原尺寸 * 百分比 / 100)` 计算目标尺寸，
//! 使用固定的 Lanczos3 重采样滤波器。
//!
//! ## 依赖关系
//! - 被 `transforms/mod.rs` 调用
//! - 使用 `image` 的 imageops 缩放

use crate::error::{PixbatchError, Result};
use image::imageops::FilterType;
use image::DynamicImage;

/// 按百分比缩放
///
/// 任一目标维度向下取整后为 0 是退化图像，报错而不是夹到 1。
pub fn apply(img: &DynamicImage, percentage: u32) -> Result<DynamicImage> {
    let (width, height) = (img.width(), img.height());
    let new_width = (u64::from(width) * u64::from(percentage) / 100) as u32;
    let new_height = (u64::from(height) * u64::from(percentage) / 100) as u32;

    if new_width == 0 || new_height == 0 {
        return Err(PixbatchError::DegenerateResize {
            width: new_width,
            height: new_height,
            percentage,
        });
    }

    Ok(img.resize_exact(new_width, new_height, FilterType::Lanczos3))
}
