//! # 画布与光栅化原语
//!
//! ## 设计思路
//!
//! 在 `image::RgbaImage` 之上提供最小的一组绘制原语：实心/描边矩形、圆角矩形、三角形。
//! 绘制直接覆盖像素，不做 alpha 混合，后画的图形盖住先画的图形。
//!
//! ## 实现思路
//!
//! - 浮点坐标在光栅化时向零截断，再裁剪到画布范围内。
//! - 描边宽度 `w` 覆盖“距离矩形边缘不足 `w` 像素”的那一圈。
//! - 圆角按像素中心判定是否落在四分之一圆内；半径最多取短边的一半。
//! - 三角形按像素索引点判定，边上的点算在内；面积为零的三角形不落笔。

use image::{Rgba, RgbaImage};

use super::RenderError;
use super::geometry::{Point, Rect};

/// 画布初始像素：全透明白色。
const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// 三角形边界判定的容差，吸收 `0.1` 这类十进制小数的浮点误差。
const EDGE_EPSILON: f64 = 1e-9;

/// 描边样式。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba<u8>,
    pub width: u32,
}

/// 填充 + 可选描边。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub fill: Option<Rgba<u8>>,
    pub outline: Option<Stroke>,
}

impl Paint {
    pub const fn fill(color: Rgba<u8>) -> Self {
        Self {
            fill: Some(color),
            outline: None,
        }
    }

    pub fn with_outline(mut self, color: Rgba<u8>, width: u32) -> Self {
        self.outline = Some(Stroke { color, width });
        self
    }
}

/// 裁剪后的整数像素范围（闭区间）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelBounds {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

/// 正方形 RGBA 画布。
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// 创建 `size × size` 的透明画布。
    pub fn new(size: u32) -> Result<Self, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidSize(size));
        }
        Ok(Self {
            image: RgbaImage::from_pixel(size, size, TRANSPARENT),
        })
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// 读取像素；坐标越界时返回 `None`。
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// 绘制矩形：先整块填充，再在内侧叠加描边。
    pub fn draw_rect(&mut self, rect: Rect, paint: Paint) {
        let Some(bounds) = self.clip(rect) else {
            return;
        };
        let (left, top, right, bottom) = Self::truncated(rect);

        for y in bounds.y0..=bounds.y1 {
            for x in bounds.x0..=bounds.x1 {
                let (xi, yi) = (x as i64, y as i64);
                let edge_distance = (xi - left).min(right - xi).min(yi - top).min(bottom - yi);
                let color = match paint.outline {
                    Some(stroke) if edge_distance < stroke.width as i64 => Some(stroke.color),
                    _ => paint.fill,
                };
                if let Some(color) = color {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// 绘制圆角矩形。
    ///
    /// 描边区域 = 外轮廓内 且 不在“向内收缩 `width`、半径同步减小”的内轮廓内。
    pub fn draw_rounded_rect(&mut self, rect: Rect, radius: u32, paint: Paint) {
        let Some(bounds) = self.clip(rect) else {
            return;
        };
        let (left, top, right, bottom) = Self::truncated(rect);

        // 像素 `[left, right]` 覆盖连续区间 `[left, right + 1)`
        let outer = RoundedBox::new(
            left as f64,
            top as f64,
            (right + 1) as f64,
            (bottom + 1) as f64,
            radius as f64,
        );
        let inner = paint.outline.map(|stroke| outer.inset(stroke.width as f64));

        for y in bounds.y0..=bounds.y1 {
            for x in bounds.x0..=bounds.x1 {
                let centre = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if !outer.contains(centre) {
                    continue;
                }
                let on_outline = inner.is_some_and(|inner| !inner.contains(centre));
                let color = match paint.outline {
                    Some(stroke) if on_outline => Some(stroke.color),
                    _ => paint.fill,
                };
                if let Some(color) = color {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// 填充三角形（含边）。
    pub fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgba<u8>) {
        let [a, b, c] = vertices;
        if edge(a, b, c).abs() <= EDGE_EPSILON {
            return;
        }

        let hull = Rect::new(
            a.x.min(b.x).min(c.x),
            a.y.min(b.y).min(c.y),
            a.x.max(b.x).max(c.x),
            a.y.max(b.y).max(c.y),
        );
        let Some(bounds) = self.clip(hull) else {
            return;
        };

        for y in bounds.y0..=bounds.y1 {
            for x in bounds.x0..=bounds.x1 {
                let p = Point::new(x as f64, y as f64);
                let d1 = edge(a, b, p);
                let d2 = edge(b, c, p);
                let d3 = edge(c, a, p);
                let has_neg = d1 < -EDGE_EPSILON || d2 < -EDGE_EPSILON || d3 < -EDGE_EPSILON;
                let has_pos = d1 > EDGE_EPSILON || d2 > EDGE_EPSILON || d3 > EDGE_EPSILON;
                if !(has_neg && has_pos) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    fn truncated(rect: Rect) -> (i64, i64, i64, i64) {
        (
            rect.x0.trunc() as i64,
            rect.y0.trunc() as i64,
            rect.x1.trunc() as i64,
            rect.y1.trunc() as i64,
        )
    }

    /// 截断坐标并裁剪到画布；空矩形或完全在画布外时返回 `None`。
    fn clip(&self, rect: Rect) -> Option<PixelBounds> {
        let (left, top, right, bottom) = Self::truncated(rect);
        if right < left || bottom < top {
            return None;
        }

        let max = self.size() as i64 - 1;
        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = right.min(max);
        let y1 = bottom.min(max);
        if x1 < x0 || y1 < y0 {
            return None;
        }

        Some(PixelBounds {
            x0: x0 as u32,
            y0: y0 as u32,
            x1: x1 as u32,
            y1: y1 as u32,
        })
    }
}

/// 连续坐标下的圆角矩形（右、下边界不含）。
#[derive(Debug, Clone, Copy)]
struct RoundedBox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    radius: f64,
}

impl RoundedBox {
    fn new(left: f64, top: f64, right: f64, bottom: f64, radius: f64) -> Self {
        let half_short = ((right - left).min(bottom - top) / 2.0).max(0.0);
        Self {
            left,
            top,
            right,
            bottom,
            radius: radius.min(half_short),
        }
    }

    fn inset(&self, width: f64) -> Self {
        Self::new(
            self.left + width,
            self.top + width,
            self.right - width,
            self.bottom - width,
            (self.radius - width).max(0.0),
        )
    }

    fn contains(&self, p: Point) -> bool {
        if p.x < self.left || p.x >= self.right || p.y < self.top || p.y >= self.bottom {
            return false;
        }
        // 到最近圆心的距离；不在角落区域时圆心即点自身
        let cx = p.x.max(self.left + self.radius).min(self.right - self.radius);
        let cy = p.y.max(self.top + self.radius).min(self.bottom - self.radius);
        let (dx, dy) = (p.x - cx, p.y - cy);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// 有向面积的两倍，符号表示 `p` 在 `a → b` 的哪一侧。
fn edge(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}
