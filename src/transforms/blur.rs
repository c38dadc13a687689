//! # 高斯模糊策略
//!
//! 各向同性高斯平滑，strength 直接作为 sigma 使用。
//!
//! ## 依赖关系
//! - 被 `transforms/mod.rs` 调用
//! - 使用 `image` 的 imageops 高斯模糊

use image::DynamicImage;

/// 应用高斯模糊
///
/// strength 为 0 时必须是逐像素恒等变换，直接返回输入的拷贝，
/// 不经过卷积（卷积的浮点舍入会破坏恒等性）。上限不在此处约束。
pub fn apply(img: &DynamicImage, strength: f32) -> DynamicImage {
    if strength <= 0.0 {
        return img.clone();
    }
    img.blur(strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8, 255])
        }))
    }

    #[test]
    fn test_strength_zero_is_identity() {
        let img = gradient_image(8, 8);
        let out = apply(&img, 0.0);
        assert_eq!(img.as_bytes(), out.as_bytes());
    }

    #[test]
    fn test_positive_strength_smooths() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(8, 8, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        }));
        let out = apply(&img, 3.0);
        assert_eq!(out.width(), 8);
        assert_eq!(out.height(), 8);
        assert_ne!(img.as_bytes(), out.as_bytes());
    }
}
