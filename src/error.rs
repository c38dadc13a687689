//! # 统一错误处理模块
//!
//! 定义 pixbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// pixbatch 统一错误类型
#[derive(Error, Debug)]
pub enum PixbatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 图像编解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode image: {path}")]
    DecodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image: {path}")]
    EncodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    // ─────────────────────────────────────────────────────────────
    // 变换错误
    // ─────────────────────────────────────────────────────────────
    #[error("Resize to {percentage}% yields degenerate dimensions {width}x{height}")]
    DegenerateResize {
        width: u32,
        height: u32,
        percentage: u32,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PixbatchError>;
