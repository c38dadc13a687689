//! # 块平均马赛克策略
//!
//! 将图像按 block_size 的正方形网格划分，网格原点固定在 (0,0)，
//! 每个块用其像素的算术平均色整体覆盖。右/底边缘的块裁剪到图像
//! 边界内计算，不做填充。块之间互不重叠，处理顺序不影响结果。
//!
//! ## 依赖关系
//! - 被 `transforms/mod.rs` 调用
//! - 使用 `image` 的 RGBA 像素缓冲

use image::{DynamicImage, Rgba};

/// 应用马赛克
///
/// block_size 为 1 时每个块就是单个像素，平均即自身，直接返回
/// 输入的拷贝以保持缓冲布局不变。
pub fn apply(img: &DynamicImage, block_size: u32) -> DynamicImage {
    if block_size <= 1 {
        return img.clone();
    }

    let mut buf = img.to_rgba8();
    let (width, height) = buf.dimensions();

    for block_y in (0..height).step_by(block_size as usize) {
        for block_x in (0..width).step_by(block_size as usize) {
            // 边缘块裁剪到图像边界
            let block_w = block_size.min(width - block_x);
            let block_h = block_size.min(height - block_y);

            let mut sums = [0u64; 4];
            for y in block_y..block_y + block_h {
                for x in block_x..block_x + block_w {
                    let pixel = buf.get_pixel(x, y);
                    for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                        *sum += u64::from(channel);
                    }
                }
            }

            let count = u64::from(block_w) * u64::from(block_h);
            let mut mean = [0u8; 4];
            for (value, sum) in mean.iter_mut().zip(sums.iter()) {
                // 四舍五入到最近的整数
                *value = ((sum + count / 2) / count) as u8;
            }

            let mean = Rgba(mean);
            for y in block_y..block_y + block_h {
                for x in block_x..block_x + block_w {
                    buf.put_pixel(x, y, mean);
                }
            }
        }
    }

    DynamicImage::ImageRgba8(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn image_from_rows(rows: &[&[u8]]) -> DynamicImage {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            let v = rows[y as usize][x as usize];
            Rgba([v, v, v, 255])
        }))
    }

    #[test]
    fn test_block_size_one_is_identity() {
        let img = image_from_rows(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]);
        let out = apply(&img, 1);
        assert_eq!(img.as_bytes(), out.as_bytes());
    }

    #[test]
    fn test_exact_blocks_take_mean() {
        // 4x4, block 2: 左上块 {10, 20, 30, 40} 的均值为 25
        let img = image_from_rows(&[
            &[10, 20, 100, 100],
            &[30, 40, 100, 100],
            &[0, 0, 200, 200],
            &[0, 0, 200, 200],
        ]);
        let out = apply(&img, 2).to_rgba8();

        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(out.get_pixel(x, y).0, [25, 25, 25, 255]);
        }
        for (x, y) in [(2, 0), (3, 0), (2, 1), (3, 1)] {
            assert_eq!(out.get_pixel(x, y).0, [100, 100, 100, 255]);
        }
        assert_eq!(out.get_pixel(0, 2).0, [0, 0, 0, 255]);
        assert_eq!(out.get_pixel(3, 3).0, [200, 200, 200, 255]);
    }

    #[test]
    fn test_edge_blocks_are_clipped_not_padded() {
        // 3x3, block 2: 右下角块只有 1 个像素，均值即自身
        let img = image_from_rows(&[&[8, 8, 40], &[8, 8, 80], &[100, 200, 90]]);
        let out = apply(&img, 2).to_rgba8();

        // 完整块
        assert_eq!(out.get_pixel(0, 0).0, [8, 8, 8, 255]);
        // 右边缘块 1x2: 均值 60
        assert_eq!(out.get_pixel(2, 0).0, [60, 60, 60, 255]);
        assert_eq!(out.get_pixel(2, 1).0, [60, 60, 60, 255]);
        // 底边缘块 2x1: 均值 150
        assert_eq!(out.get_pixel(0, 2).0, [150, 150, 150, 255]);
        assert_eq!(out.get_pixel(1, 2).0, [150, 150, 150, 255]);
        // 角块 1x1
        assert_eq!(out.get_pixel(2, 2).0, [90, 90, 90, 255]);
    }

    #[test]
    fn test_block_interior_is_uniform() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(10, 7, |x, y| {
            Rgba([(x * 23 + y * 7) as u8, (y * 31) as u8, (x * 11) as u8, 255])
        }));
        let block_size = 4;
        let out = apply(&img, block_size).to_rgba8();

        for y in 0..7u32 {
            for x in 0..10u32 {
                let anchor_x = x - x % block_size;
                let anchor_y = y - y % block_size;
                assert_eq!(out.get_pixel(x, y), out.get_pixel(anchor_x, anchor_y));
            }
        }
    }
}
