//! # 输出计划配置
//!
//! ## 设计思路
//!
//! 输出目录、密度表、文件名都是写死的，但仍集中到 `IconConfig` 一处，
//! 保证生成行为可观测、可测试：测试只需换一个根目录，其余计划保持不变。
//!
//! ## 实现思路
//!
//! - `Default` 提供打包流水线实际使用的那份计划。
//! - `with_res_dir` 把同一份计划指向另一个 `res/` 根目录。
//! - `validate` 在动笔之前拒绝明显错误的计划（空表、零尺寸、重名）。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// 打包流水线读取的 Android `res/` 目录。
pub const DEFAULT_RES_DIR: &str =
    "/Users/seonggukpark/youtube-summarizer/frontend/android/app/src/main/res";

/// 一个密度目录及其图标边长。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityTarget {
    pub folder: &'static str,
    pub size: u32,
}

impl DensityTarget {
    pub const fn new(folder: &'static str, size: u32) -> Self {
        Self { folder, size }
    }
}

/// Android 启动图标的五档密度。
pub const ANDROID_DENSITIES: [DensityTarget; 5] = [
    DensityTarget::new("mipmap-mdpi", 48),
    DensityTarget::new("mipmap-hdpi", 72),
    DensityTarget::new("mipmap-xhdpi", 96),
    DensityTarget::new("mipmap-xxhdpi", 144),
    DensityTarget::new("mipmap-xxxhdpi", 192),
];

/// 图标生成计划。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Android `res/` 根目录。
    pub res_dir: PathBuf,
    /// 需要生成的密度目录，按顺序处理。
    pub densities: Vec<DensityTarget>,
    /// 普通启动图标文件名。
    pub launcher_file_name: String,
    /// 圆形启动图标文件名（与普通图标同一张图）。
    pub round_file_name: String,
    /// 应用商店高清图标边长。
    pub store_icon_size: u32,
    /// 商店图标路径，相对 `res_dir` 原样拼接，不做规范化。
    pub store_icon_path: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            res_dir: PathBuf::from(DEFAULT_RES_DIR),
            densities: ANDROID_DENSITIES.to_vec(),
            launcher_file_name: "ic_launcher.png".to_string(),
            round_file_name: "ic_launcher_round.png".to_string(),
            store_icon_size: 512,
            store_icon_path: Path::new("..").join("..").join("ic_launcher-playstore.png"),
        }
    }
}

impl IconConfig {
    /// 以默认计划为基础，改写 `res/` 根目录。
    pub fn with_res_dir(res_dir: impl Into<PathBuf>) -> Self {
        Self {
            res_dir: res_dir.into(),
            ..Self::default()
        }
    }

    /// 商店图标的完整输出路径。
    pub fn store_icon_file(&self) -> PathBuf {
        self.res_dir.join(&self.store_icon_path)
    }

    /// 校验计划是否可执行。
    pub fn validate(&self) -> Result<(), AppError> {
        if self.densities.is_empty() {
            return Err(AppError::Config("密度列表为空".to_string()));
        }

        let mut seen = HashSet::new();
        for target in &self.densities {
            if target.folder.is_empty() {
                return Err(AppError::Config("密度目录名为空".to_string()));
            }
            if target.size == 0 {
                return Err(AppError::Config(format!(
                    "密度目录 '{}' 的图标尺寸为 0",
                    target.folder
                )));
            }
            if !seen.insert(target.folder) {
                return Err(AppError::Config(format!(
                    "密度目录 '{}' 重复",
                    target.folder
                )));
            }
        }

        if self.store_icon_size == 0 {
            return Err(AppError::Config("商店图标尺寸为 0".to_string()));
        }

        if self.launcher_file_name.is_empty() || self.round_file_name.is_empty() {
            return Err(AppError::Config("图标文件名为空".to_string()));
        }

        if self.launcher_file_name == self.round_file_name {
            return Err(AppError::Config(format!(
                "普通图标与圆形图标文件名相同：{}",
                self.launcher_file_name
            )));
        }

        Ok(())
    }
}
