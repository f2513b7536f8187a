//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，生成流程中的每一步（渲染、建目录、
//! 编码写盘、回读校验）都返回 `Result<T, AppError>`，由 `main` 统一捕获并打印。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `RenderError` 与 `std::io::Error` 提供 `From` 转换，调用侧直接 `?`。
//! - 编码失败携带目标路径，便于定位是哪个密度目录出错。

use std::path::PathBuf;

use crate::icon::RenderError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标绘制失败
    #[error("{0}")]
    Render(#[from] RenderError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// PNG 编码或写盘失败
    #[error("保存图片 '{}' 失败: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 生成结果回读校验不通过
    #[error("输出校验失败: {0}")]
    Verify(String),

    /// 输出计划配置非法
    #[error("配置错误: {0}")]
    Config(String),
}
