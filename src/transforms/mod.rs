//! # 像素变换策略模块
//!
//! 定义封闭的变换集合（模糊 / 马赛克 / 缩放），统一通过 `apply` 调用。
//! 每个策略都是纯函数：输入像素缓冲，输出新的像素缓冲，不做任何 I/O。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 子模块: blur, mosaic, resize

pub mod blur;
pub mod mosaic;
pub mod resize;

use crate::error::Result;
use image::DynamicImage;

/// 批处理选定的像素变换，参数在批次开始时固定，批次内不可变
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// 高斯模糊，strength 即 sigma
    Blur { strength: f32 },
    /// 块平均马赛克
    Mosaic { block_size: u32 },
    /// 按百分比缩放
    Resize { percentage: u32 },
}

impl Transform {
    /// 应用变换，返回新的像素缓冲
    pub fn apply(&self, img: &DynamicImage) -> Result<DynamicImage> {
        match *self {
            Transform::Blur { strength } => Ok(blur::apply(img, strength)),
            Transform::Mosaic { block_size } => Ok(mosaic::apply(img, block_size)),
            Transform::Resize { percentage } => resize::apply(img, percentage),
        }
    }

    /// 非破坏性输出时使用的同级文件夹默认名称
    pub fn default_folder(&self) -> &'static str {
        match self {
            Transform::Blur { .. } => "blurred",
            Transform::Mosaic { .. } => "mosaic",
            Transform::Resize { .. } => "resized",
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transform::Blur { strength } => write!(f, "blur (strength {})", strength),
            Transform::Mosaic { block_size } => write!(f, "mosaic (block size {})", block_size),
            Transform::Resize { percentage } => write!(f, "resize ({}%)", percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_folder_names() {
        assert_eq!(Transform::Blur { strength: 5.0 }.default_folder(), "blurred");
        assert_eq!(Transform::Mosaic { block_size: 10 }.default_folder(), "mosaic");
        assert_eq!(Transform::Resize { percentage: 50 }.default_folder(), "resized");
    }
}
