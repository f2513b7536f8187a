//! # 启动图标生成器 — 程序入口
//!
//! 本文件仅负责日志初始化与顶层错误捕获。
//! 绘制与写盘逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use launcher_icon_gen::{AppError, IconConfig, generate_all_icons, verify_generated_icons};

fn run() -> Result<usize, AppError> {
    let config = IconConfig::default();
    log::info!("输出目录: {}", config.res_dir.display());

    let generated = generate_all_icons(&config)?;
    verify_generated_icons(&generated)?;
    Ok(generated.len())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(count) => {
            println!("\n✅ 所有图标已成功生成（{} 个文件）！", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("\n❌ 图标生成过程中发生错误: {}", err);
            ExitCode::FAILURE
        }
    }
}
