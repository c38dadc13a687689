//! # 批量处理模块
//!
//! 提供文件收集和批量执行能力。
//!
//! ## 功能
//! - 展开用户选择（文件/目录/拖放字符串）为有序图像路径列表
//! - 逐文件 解码 -> 变换 -> 编码，单文件失败不中断批次
//! - 进度反馈与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `rayon` 进行可选并行
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchOutcome, BatchResult, BatchRunner, OutputPlacement};
