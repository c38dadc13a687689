//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑，三个子命令共用同一条批处理流水线。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `transforms/`, `utils/`
//! - 子模块: blur, mosaic, resize

pub mod blur;
pub mod mosaic;
pub mod resize;

use crate::batch::{BatchResult, BatchRunner, FileCollector, OutputPlacement};
use crate::batch::collector;
use crate::cli::{BatchOpts, Commands};
use crate::error::Result;
use crate::transforms::Transform;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Blur(args) => blur::execute(args),
        Commands::Mosaic(args) => mosaic::execute(args),
        Commands::Resize(args) => resize::execute(args),
    }
}

/// 三个子命令共用的批处理流水线
///
/// 选择展开 -> 文件收集 -> 覆盖确认 -> 批量执行 -> 汇总报告。
/// 变换参数在此处固定为不可变配置，批次运行期间不再读取。
pub fn run_batch(opts: &BatchOpts, transform: Transform) -> Result<()> {
    output::print_header(&format!("Batch {}", transform));

    let mut selections = Vec::new();
    for raw in &opts.paths {
        selections.extend(collector::parse_selection(raw));
    }

    let files = FileCollector::new(selections).collect();

    if files.is_empty() {
        output::print_warning("No image files matched the given paths");
        return Ok(());
    }

    output::print_info(&format!("Found {} image file(s) to process", files.len()));

    let placement = if opts.in_place {
        OutputPlacement::Overwrite
    } else {
        let folder = opts
            .folder
            .clone()
            .unwrap_or_else(|| transform.default_folder().to_string());
        OutputPlacement::SiblingFolder(folder)
    };

    // 破坏性覆盖前必须得到明确确认，拒绝则整批零处理退出
    if placement == OutputPlacement::Overwrite && !opts.yes {
        let question = format!(
            "This will overwrite {} original file(s) in place. Continue?",
            files.len()
        );
        if !output::confirm(&question) {
            output::print_info("Aborted, no files were processed");
            return Ok(());
        }
    }

    let runner = BatchRunner::new(opts.jobs);
    let outcomes = runner.run(&files, transform, &placement);

    let result = BatchResult::from_outcomes(&outcomes);
    output::print_done(&format!(
        "Processed {} file(s): {} saved, {} failed",
        result.total(),
        result.saved,
        result.failed
    ));

    Ok(())
}
