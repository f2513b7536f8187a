//! # 几何布局模块
//!
//! ## 设计思路
//!
//! 把“边长 → 各图形坐标”的计算与真正的像素绘制拆开：
//! 布局是纯函数，单测可以直接断言数值，绘制层只负责按顺序落笔。
//!
//! ## 实现思路
//!
//! - 整数除法一律用 `u32` 的地板除；带小数系数的乘积保留 `f64`，直到光栅化时才截断。
//! - `size // 2.5` 这类“浮点地板除”用 `floor_div` 表达，结果仍是 `f64`。
//! - 所有矩形均为闭区间 `[x0, x1] × [y0, y1]`（像素索引）。

/// 平面上的一个点（像素索引坐标）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 闭区间矩形：左上角 `(x0, y0)`，右下角 `(x1, y1)`，两端都包含。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// 判断点是否落在矩形内（含边界）。
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }
}

/// 某一边长下整枚图标的全部图形位置。
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    /// 画布边长（像素）。
    pub size: u32,
    /// 白色圆角卡片。
    pub card: Rect,
    pub card_radius: u32,
    /// 红色播放按钮底板。
    pub badge: Rect,
    pub badge_radius: u32,
    /// 白色播放三角形。
    pub play_triangle: [Point; 3],
    /// 文档底板。
    pub document: Rect,
    /// 文档右上角的折角。
    pub fold: [Point; 3],
    /// 文档内的三行“文字”。
    pub text_lines: [Rect; 3],
}

/// 描边宽度（卡片与文档共用，不随尺寸缩放）。
pub const OUTLINE_WIDTH: u32 = 2;

/// 文字行高度（不随尺寸缩放）。
const TEXT_LINE_HEIGHT: f64 = 2.0;

fn floor_div(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

impl IconLayout {
    /// 计算给定边长下的布局。
    ///
    /// # 示例
    /// ```rust
    /// use launcher_icon_gen::icon::IconLayout;
    ///
    /// let layout = IconLayout::for_size(48);
    /// assert_eq!(layout.card_radius, 6);
    /// ```
    pub fn for_size(size: u32) -> Self {
        let s = size as f64;

        let padding = (size / 10) as f64;
        let card = Rect::new(padding, padding, s - padding, s - padding);

        let badge_size = size / 2;
        let badge_x = (size / 4) as f64;
        let badge_y = (size / 3) as f64;
        let badge_extent = badge_size as f64;
        let badge = Rect::new(
            badge_x,
            badge_y,
            badge_x + badge_extent,
            badge_y + badge_extent * 0.7,
        );

        let play_size = badge_size / 3;
        let play_x = (size / 4 + badge_size / 2 - play_size / 3) as f64;
        let play_y = badge_y + badge_extent * 0.35;
        let half_play = (play_size / 2) as f64;
        let play_triangle = [
            Point::new(play_x, play_y - half_play),
            Point::new(play_x, play_y + half_play),
            Point::new(play_x + play_size as f64, play_y),
        ];

        let doc_width = floor_div(s, 2.5);
        let doc_height = (size / 3) as f64;
        let doc_x = (size / 2) as f64 - floor_div(doc_width, 2.0);
        let doc_y = s * 0.55;
        let document = Rect::new(doc_x, doc_y, doc_x + doc_width, doc_y + doc_height);

        let corner = floor_div(doc_width, 5.0);
        let right = doc_x + doc_width;
        let fold = [
            Point::new(right - corner, doc_y),
            Point::new(right, doc_y + corner),
            Point::new(right - corner, doc_y + corner),
        ];

        let line_width = doc_width * 0.6;
        let line_x = doc_x + doc_width * 0.2;
        let line_spacing = ((size / 3) / 6) as f64;
        let text_lines = std::array::from_fn(|i| {
            let line_y = doc_y + doc_height * 0.3 + i as f64 * line_spacing;
            Rect::new(line_x, line_y, line_x + line_width, line_y + TEXT_LINE_HEIGHT)
        });

        Self {
            size,
            card,
            card_radius: size / 8,
            badge,
            badge_radius: size / 16,
            play_triangle,
            document,
            fold,
            text_lines,
        }
    }
}

/// 背景渐变第 `row` 行的 alpha：自上而下从 255 线性衰减约 30%。
pub fn gradient_alpha(row: u32, size: u32) -> u8 {
    let t = row as f64 / size as f64 * 0.3;
    (255.0 * (1.0 - t)).floor().clamp(0.0, 255.0) as u8
}
