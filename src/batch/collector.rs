//! # 文件收集器
//!
//! 将用户选择的路径（文件、目录、拖放多路径字符串）展开为
//! 有序、确定性的图像文件列表。
//!
//! ## 功能
//! - 目录递归展开（按文件名排序，每个常规文件恰好访问一次）
//! - 扩展名白名单过滤（大小写不敏感），不匹配的路径静默排除
//! - 解析拖放工具链的花括号多路径约定
//! - 不打开文件内容，损坏的图像留给下游解码时发现
//!
//! ## 依赖关系
//! - 被 `commands/` 模块调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 支持的图像扩展名（大小写不敏感）
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

/// 解析一条原始选择字符串为路径列表
///
/// 拖放工具链将多个路径拼成一个字符串，每个路径可能被花括号
/// 包裹；这里去掉包裹的花括号并按空白切分。普通的单路径参数
/// 不含空白时原样通过。
pub fn parse_selection(raw: &str) -> Vec<PathBuf> {
    raw.split_whitespace()
        .map(|part| PathBuf::from(part.trim_matches(|c| c == '{' || c == '}')))
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// 文件收集器
pub struct FileCollector {
    /// 用户选择的路径，保持输入顺序
    selections: Vec<PathBuf>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(selections: Vec<PathBuf>) -> Self {
        Self { selections }
    }

    /// 展开所有选择，返回有序的图像文件列表
    ///
    /// 目录递归遍历并按文件名排序保证确定性；非目录路径作为
    /// 文件候选直接参与过滤，不存在的路径同样放行，由解码阶段
    /// 报告错误。
    pub fn collect(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for selection in &self.selections {
            if selection.is_dir() {
                let walker = WalkDir::new(selection)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file());

                for entry in walker {
                    if is_image_file(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
            } else if is_image_file(selection) {
                files.push(selection.clone());
            }
        }

        files
    }
}

/// 检查扩展名是否在白名单内
fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
