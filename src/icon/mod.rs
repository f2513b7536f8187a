//! # 图标绘制模块（icon）
//!
//! ## 设计思路
//!
//! 把“算坐标 → 落像素 → 组合成图标”按职责拆成三个子模块：
//!
//! - `geometry`：纯布局计算，边长 → 各图形坐标
//! - `canvas`：RGBA 画布上的矩形 / 圆角矩形 / 三角形原语
//! - `render`：按固定顺序组合出完整图标
//! - `error`：渲染阶段错误
//!
//! ## 调用链
//!
//! ```text
//! generator.rs
//!    ↓
//! render_icon(size)
//!    ├─ IconLayout::for_size(size)   （geometry.rs）
//!    └─ Canvas::draw_*               （canvas.rs）
//!    ↓
//! RgbaImage
//! ```

mod canvas;
mod error;
mod geometry;
mod render;

pub use canvas::{Canvas, Paint, Stroke};
pub use error::RenderError;
pub use geometry::{IconLayout, Point, Rect, gradient_alpha};
pub use render::render_icon;
