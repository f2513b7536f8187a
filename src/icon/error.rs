//! # 渲染错误模块
//!
//! 渲染阶段唯一可能的失败是非法边长，单独成类型后在 `AppError` 中上转。

/// 图标渲染错误类型。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("非法图标尺寸：{0}（边长必须大于 0）")]
    InvalidSize(u32),
}
