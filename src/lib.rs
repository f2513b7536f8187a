//! # 启动图标生成器 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   env_logger 初始化 + 顶层捕获并打印              │
//! │     ↓                                                    │
//! │  generator ── 遍历密度表，写 PNG                          │
//! │     ├─ config    输出计划（res 目录 / 密度表 / 文件名）     │
//! │     ├─ icon      绘制图标（布局 · 画布 · 组合）             │
//! │     └─ verify    回读校验（格式 + 尺寸）                   │
//! │                                                          │
//! │  error ── AppError（统一错误类型）                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`config`] | 写死的输出计划 `IconConfig` 与校验 |
//! | [`icon`] | 按边长绘制“播放按钮 + 文档”图标 |
//! | [`generator`] | 生成全部密度图标与商店图标 |
//! | [`verify`] | 读回已写出的 PNG，核对格式与尺寸 |

pub mod config;
pub mod error;
pub mod generator;
pub mod icon;
pub mod verify;

pub use config::IconConfig;
pub use error::AppError;
pub use generator::{GeneratedIcon, generate_all_icons};
pub use verify::verify_generated_icons;
