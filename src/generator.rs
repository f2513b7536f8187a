//! # 图标生成编排
//!
//! ## 设计思路
//!
//! 遍历配置中的密度表：每档绘制一次，同一张图分别存为普通图标与圆形图标；
//! 最后单独绘制 512 像素的商店图标。任何一步失败立即返回，已写出的文件保留。
//!
//! ## 实现思路
//!
//! - 目录不存在时自动 `create_dir_all`。
//! - PNG 编码与写盘委托 `image` crate，失败时带上目标路径。
//! - 每写出一个文件输出一行 `info` 日志，返回值按写出顺序列出全部文件。

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::config::IconConfig;
use crate::error::AppError;
use crate::icon::render_icon;

/// 已写出的一个图标文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    /// 图标边长（像素）。
    pub size: u32,
}

/// 按计划生成全部图标。
///
/// # 返回
/// - `Ok(Vec<GeneratedIcon>)` — 每档 2 个文件 + 1 个商店图标，按写出顺序
/// - `Err(AppError)` — 配置非法、建目录失败或写盘失败
pub fn generate_all_icons(config: &IconConfig) -> Result<Vec<GeneratedIcon>, AppError> {
    config.validate()?;

    let mut generated = Vec::with_capacity(config.densities.len() * 2 + 1);

    for target in &config.densities {
        let dir = config.res_dir.join(target.folder);
        fs::create_dir_all(&dir)?;

        let icon = render_icon(target.size)?;
        for file_name in [&config.launcher_file_name, &config.round_file_name] {
            generated.push(save_png(&icon, &dir.join(file_name), target.size)?);
        }
    }

    let store_icon = render_icon(config.store_icon_size)?;
    let store_path = config.store_icon_file();
    if let Some(parent) = store_path.parent() {
        fs::create_dir_all(parent)?;
    }
    generated.push(save_png(&store_icon, &store_path, config.store_icon_size)?);

    log::info!("✅ 共生成 {} 个图标文件", generated.len());
    Ok(generated)
}

fn save_png(icon: &RgbaImage, path: &Path, size: u32) -> Result<GeneratedIcon, AppError> {
    icon.save_with_format(path, ImageFormat::Png)
        .map_err(|source| AppError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("生成: {} ({}x{})", path.display(), size, size);

    Ok(GeneratedIcon {
        path: path.to_path_buf(),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DensityTarget;

    fn small_plan(res_dir: &Path) -> IconConfig {
        IconConfig {
            densities: vec![DensityTarget::new("mipmap-test", 16)],
            store_icon_size: 32,
            ..IconConfig::with_res_dir(res_dir)
        }
    }

    #[test]
    fn test_generates_launcher_round_and_store_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let res_dir = tmp.path().join("app").join("src").join("main").join("res");

        let generated = generate_all_icons(&small_plan(&res_dir)).unwrap();
        let names: Vec<String> = generated
            .iter()
            .map(|g| g.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        let expected = [
            "ic_launcher.png",
            "ic_launcher_round.png",
            "ic_launcher-playstore.png",
        ];
        assert_eq!(names, expected);
        assert_eq!(generated[0].size, 16);
        assert_eq!(generated[2].size, 32);

        let store = tmp.path().join("app/src/ic_launcher-playstore.png");
        assert!(store.is_file());
    }

    #[test]
    fn test_invalid_plan_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = small_plan(tmp.path());
        config.densities.push(DensityTarget::new("mipmap-zero", 0));

        let result = generate_all_icons(&config);
        assert!(matches!(result, Err(AppError::Config(_))));
        assert!(!tmp.path().join("mipmap-test").exists());
    }

    #[test]
    fn test_unwritable_target_reports_error() {
        let tmp = tempfile::tempdir().unwrap();
        // 用普通文件占住密度目录的位置，建目录必然失败
        fs::write(tmp.path().join("mipmap-test"), b"not a dir").unwrap();

        let result = generate_all_icons(&small_plan(tmp.path()));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_failure_keeps_earlier_densities() {
        let tmp = tempfile::tempdir().unwrap();
        // 第二档目录被普通文件占住，第一档已写出的文件应保留
        fs::write(tmp.path().join("mipmap-hdpi"), b"not a dir").unwrap();

        let result = generate_all_icons(&IconConfig::with_res_dir(tmp.path()));
        assert!(matches!(result, Err(AppError::Io(_))));

        let mdpi = tmp.path().join("mipmap-mdpi");
        assert!(mdpi.join("ic_launcher.png").is_file());
        assert!(mdpi.join("ic_launcher_round.png").is_file());
        assert!(!tmp.path().join("mipmap-xhdpi").exists());
    }

    #[test]
    fn test_encode_failure_names_target_path() {
        let tmp = tempfile::tempdir().unwrap();
        // 目标文件名被目录占住，PNG 写盘必然失败
        let blocked = tmp.path().join("mipmap-test").join("ic_launcher.png");
        fs::create_dir_all(&blocked).unwrap();

        let err = generate_all_icons(&small_plan(tmp.path())).unwrap_err();
        assert!(matches!(err, AppError::Encode { .. }));
        assert!(err.to_string().contains(&blocked.display().to_string()));
    }
}
