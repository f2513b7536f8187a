//! # 图标绘制
//!
//! 按固定顺序把 `IconLayout` 中的图形画到画布上：
//! 渐变背景 → 白色卡片 → 红色底板 → 播放三角 → 文档 → 折角 → 文字行。

use std::time::Instant;

use image::{Rgba, RgbaImage};

use super::RenderError;
use super::canvas::{Canvas, Paint};
use super::geometry::{IconLayout, OUTLINE_WIDTH, Rect, gradient_alpha};

const CARD_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CARD_OUTLINE: Rgba<u8> = Rgba([220, 220, 220, 255]);
const BADGE_RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const PLAY_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const DOC_FILL: Rgba<u8> = Rgba([240, 240, 240, 255]);
const DOC_OUTLINE: Rgba<u8> = Rgba([100, 100, 100, 255]);
const FOLD_GREY: Rgba<u8> = Rgba([200, 200, 200, 255]);
const TEXT_GREY: Rgba<u8> = Rgba([150, 150, 150, 255]);

/// 背景渐变色（alpha 按行变化）。
fn gradient_color(alpha: u8) -> Rgba<u8> {
    Rgba([255, 240, 240, alpha])
}

/// 绘制边长为 `size` 的应用图标。
///
/// # 返回
/// - `Ok(RgbaImage)` — `size × size` 的图标
/// - `Err(RenderError::InvalidSize)` — `size` 为 0
pub fn render_icon(size: u32) -> Result<RgbaImage, RenderError> {
    let started = Instant::now();
    let mut canvas = Canvas::new(size)?;
    let layout = IconLayout::for_size(size);
    let s = size as f64;

    // 每次覆盖两行，下一轮再把第二行覆盖成自己的 alpha
    for row in 0..size {
        let y = row as f64;
        canvas.draw_rect(
            Rect::new(0.0, y, s, y + 1.0),
            Paint::fill(gradient_color(gradient_alpha(row, size))),
        );
    }

    canvas.draw_rounded_rect(
        layout.card,
        layout.card_radius,
        Paint::fill(CARD_FILL).with_outline(CARD_OUTLINE, OUTLINE_WIDTH),
    );
    canvas.draw_rounded_rect(layout.badge, layout.badge_radius, Paint::fill(BADGE_RED));
    canvas.fill_triangle(layout.play_triangle, PLAY_WHITE);

    canvas.draw_rect(
        layout.document,
        Paint::fill(DOC_FILL).with_outline(DOC_OUTLINE, OUTLINE_WIDTH),
    );
    canvas.fill_triangle(layout.fold, FOLD_GREY);
    for line in layout.text_lines {
        canvas.draw_rect(line, Paint::fill(TEXT_GREY));
    }

    log::debug!(
        "🎨 图标绘制完成 - 尺寸: {}x{} 耗时: {:?} 布局: {:?}",
        size,
        size,
        started.elapsed(),
        layout
    );

    Ok(canvas.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn px(image: &RgbaImage, x: u32, y: u32) -> Rgba<u8> {
        *image.get_pixel(x, y)
    }

    #[test]
    fn test_zero_size_is_error() {
        assert_eq!(render_icon(0).err(), Some(RenderError::InvalidSize(0)));
    }

    #[test]
    fn test_mdpi_composition() {
        let icon = render_icon(48).unwrap();
        assert_eq!(icon.dimensions(), (48, 48));

        // 渐变背景：顶行不透明，底行约 70%
        assert_eq!(px(&icon, 0, 0), gradient_color(255));
        assert_eq!(px(&icon, 0, 47), gradient_color(180));
        // 卡片圆角之外仍是渐变
        assert_eq!(px(&icon, 4, 4), gradient_color(248));

        assert_eq!(px(&icon, 24, 10), CARD_FILL);
        assert_eq!(px(&icon, 4, 24), CARD_OUTLINE);
        assert_eq!(px(&icon, 14, 18), BADGE_RED);
        assert_eq!(px(&icon, 24, 24), PLAY_WHITE);
        assert_eq!(px(&icon, 17, 38), DOC_FILL);
        assert_eq!(px(&icon, 15, 38), DOC_OUTLINE);
        assert_eq!(px(&icon, 32, 29), FOLD_GREY);
        assert_eq!(px(&icon, 24, 32), TEXT_GREY);
    }

    #[test]
    fn test_store_icon_composition() {
        let icon = render_icon(512).unwrap();
        let layout = IconLayout::for_size(512);

        assert_eq!(icon.dimensions(), (512, 512));
        assert_eq!(px(&icon, 256, 80), CARD_FILL);
        assert_eq!(px(&icon, 140, 200), BADGE_RED);

        let tip = layout.play_triangle[2];
        assert_eq!(px(&icon, tip.x as u32 - 5, tip.y as u32), PLAY_WHITE);
        assert_eq!(px(&icon, tip.x as u32 + 5, tip.y as u32), BADGE_RED);
    }

    #[test]
    fn test_tiny_sizes_do_not_panic() {
        for size in 1..=12 {
            let icon = render_icon(size).unwrap();
            assert_eq!(icon.dimensions(), (size, size));
        }
    }

    proptest! {
        #[test]
        fn prop_icon_is_square_with_gradient_corner(size in 10u32..=256) {
            let icon = render_icon(size).unwrap();
            prop_assert_eq!(icon.dimensions(), (size, size));

            // size >= 10 时卡片内边距至少 1 像素，左上角只剩渐变
            prop_assert_eq!(px(&icon, 0, 0), gradient_color(255));
            let bottom = gradient_color(gradient_alpha(size - 1, size));
            prop_assert_eq!(px(&icon, 0, size - 1), bottom);
        }
    }
}
