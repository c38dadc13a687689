//! # 批量执行器
//!
//! 逐文件驱动 解码 -> 变换 -> 编码 流水线。
//!
//! ## 功能
//! - 每个文件严格一次解码、一次变换、一次编码，互相之间无共享状态
//! - 单文件失败转为 Failed 结果并继续，绝不中断批次，也不重试
//! - 输出位置策略：原地覆盖，或写入与源文件同级的子文件夹
//! - 逐文件输出一行 Saved / Error processing 日志
//! - 可选 rayon 并行（文件间天然无依赖），结果仍按输入顺序收集
//!
//! ## 依赖关系
//! - 被 `commands/` 模块调用
//! - 使用 `transforms/` 的变换策略
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{PixbatchError, Result};
use crate::transforms::Transform;
use crate::utils::{output, progress};

use image::DynamicImage;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// 输出位置策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPlacement {
    /// 原地覆盖源文件（破坏性）
    Overwrite,
    /// 写入与源文件同级、指定名称的子文件夹，保留原文件名
    SiblingFolder(String),
}

impl OutputPlacement {
    /// 根据输入路径计算输出路径
    pub fn target_path(&self, input: &Path) -> PathBuf {
        match self {
            OutputPlacement::Overwrite => input.to_path_buf(),
            OutputPlacement::SiblingFolder(name) => {
                let dir = input.parent().unwrap_or_else(|| Path::new(""));
                match input.file_name() {
                    Some(file_name) => dir.join(name).join(file_name),
                    None => dir.join(name),
                }
            }
        }
    }
}

/// 单个文件的处理结果，按输入顺序逐文件产生
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// 已保存（输出路径）
    Saved(PathBuf),
    /// 处理失败（输入路径, 错误信息）
    Failed(PathBuf, String),
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub saved: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: &BatchOutcome) {
        match outcome {
            BatchOutcome::Saved(_) => self.saved += 1,
            BatchOutcome::Failed(path, reason) => {
                self.failed += 1;
                self.failures.push((path.clone(), reason.clone()));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.saved + self.failed
    }

    /// 从有序结果列表汇总
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let mut result = Self::default();
        for outcome in outcomes {
            result.merge(outcome);
        }
        result
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数，1 为顺序执行
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 自动检测 CPU 数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 处理文件列表，返回与输入同序的结果
    ///
    /// 变换参数在整个批次内固定（Transform 按值捕获，不存在
    /// 中途被改写的共享状态）。
    pub fn run(
        &self,
        files: &[PathBuf],
        transform: Transform,
        placement: &OutputPlacement,
    ) -> Vec<BatchOutcome> {
        let pb = progress::create_progress_bar(files.len() as u64, "Processing");

        let pool = match rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build() {
            Ok(pool) => pool,
            Err(e) => {
                output::print_error(&format!("Failed to build thread pool: {}", e));
                return Vec::new();
            }
        };

        let outcomes: Vec<BatchOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let outcome = match process_file(path, transform, placement) {
                        Ok(saved_path) => BatchOutcome::Saved(saved_path),
                        Err(e) => BatchOutcome::Failed(path.clone(), error_chain(&e)),
                    };

                    pb.suspend(|| match &outcome {
                        BatchOutcome::Saved(saved_path) => {
                            output::print_success(&format!("Saved {}", saved_path.display()));
                        }
                        BatchOutcome::Failed(path, reason) => {
                            output::print_error(&format!(
                                "Error processing {}: {}",
                                path.display(),
                                reason
                            ));
                        }
                    });

                    pb.inc(1);
                    outcome
                })
                .collect()
        });

        pb.finish_and_clear();
        outcomes
    }
}

/// 处理单个文件：解码 -> 变换 -> 编码
fn process_file(
    path: &Path,
    transform: Transform,
    placement: &OutputPlacement,
) -> Result<PathBuf> {
    let img = image::open(path).map_err(|e| PixbatchError::DecodeError {
        path: path.display().to_string(),
        source: e,
    })?;

    let transformed = transform.apply(&img)?;

    let target = placement.target_path(path);
    if let OutputPlacement::SiblingFolder(_) = placement {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| PixbatchError::FileWriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }

    save_image(&transformed, &target)?;
    Ok(target)
}

/// 编码并写入输出文件
///
/// JPEG 不支持 alpha 通道，目标扩展名为 jpg/jpeg 时先铺平为 RGB。
fn save_image(img: &DynamicImage, target: &Path) -> Result<()> {
    let is_jpeg = target
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "jpg" || ext == "jpeg"
        })
        .unwrap_or(false);

    let result = if is_jpeg && img.color().has_alpha() {
        DynamicImage::ImageRgb8(img.to_rgb8()).save(target)
    } else {
        img.save(target)
    };

    result.map_err(|e| PixbatchError::EncodeError {
        path: target.display().to_string(),
        source: e,
    })
}

/// 拼接错误及其来源链为一条可读信息
fn error_chain(err: &PixbatchError) -> String {
    use std::error::Error;

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
