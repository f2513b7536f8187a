//! # 输出回读校验
//!
//! 写盘后逐个读回文件头：确认文件存在、内容确实是 PNG、宽高与目标边长一致。
//! 只读取头信息，不做完整解码。

use std::fs;
use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::AppError;
use crate::generator::GeneratedIcon;

/// 校验全部已生成的图标。
pub fn verify_generated_icons(icons: &[GeneratedIcon]) -> Result<(), AppError> {
    for icon in icons {
        verify_icon(icon)?;
    }
    log::debug!("🔍 {} 个图标文件校验通过", icons.len());
    Ok(())
}

fn verify_icon(icon: &GeneratedIcon) -> Result<(), AppError> {
    let bytes = fs::read(&icon.path).map_err(|e| {
        AppError::Verify(format!("无法读取 '{}': {}", icon.path.display(), e))
    })?;

    let format = image::guess_format(&bytes).map_err(|e| {
        AppError::Verify(format!("无法识别 '{}' 的格式: {}", icon.path.display(), e))
    })?;
    if format != ImageFormat::Png {
        return Err(AppError::Verify(format!(
            "'{}' 不是 PNG（实际：{:?}）",
            icon.path.display(),
            format
        )));
    }

    let dimensions = ImageReader::with_format(Cursor::new(&bytes), ImageFormat::Png)
        .into_dimensions()
        .map_err(|e| {
            AppError::Verify(format!("无法读取 '{}' 的尺寸: {}", icon.path.display(), e))
        })?;

    if dimensions != (icon.size, icon.size) {
        return Err(AppError::Verify(format!(
            "'{}' 尺寸为 {}x{}，期望 {}x{}",
            icon.path.display(),
            dimensions.0,
            dimensions.1,
            icon.size,
            icon.size
        )));
    }

    Ok(())
}
