//! 更新检查结果模型
//!
//! - `UpdateCandidate`: 单个本机安装的可用更新
//! - `RadarReport`: 一次完整扫描+检查的汇总结果

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::catalog::CatalogPackage;
use crate::models::jdk::DetectedJdk;
use crate::models::version::{FormatStyle, VersionNumber};

/// 单个JDK安装的可用更新
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCandidate {
    /// 本机安装
    pub installed: DetectedJdk,

    /// 目录中更新的版本
    pub available_version: VersionNumber,

    /// 对应的目录条目
    pub package: CatalogPackage,
}

impl UpdateCandidate {
    /// 展示用的升级描述 (如 "17.0.2 -> 17.0.10")
    pub fn describe(&self) -> String {
        format!(
            "{} -> {}",
            self.installed.display_version(),
            self.available_version.format(FormatStyle::Reduced, true, true)
        )
    }
}

/// 一次扫描+更新检查的汇总结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarReport {
    /// 本机检测到的全部JDK
    pub detected: Vec<DetectedJdk>,

    /// 有更新可用的安装
    pub updates: Vec<UpdateCandidate>,

    /// 检查完成时间
    pub checked_at: DateTime<Utc>,
}

impl RadarReport {
    /// 创建汇总结果
    pub fn new(detected: Vec<DetectedJdk>, updates: Vec<UpdateCandidate>) -> Self {
        Self {
            detected,
            updates,
            checked_at: Utc::now(),
        }
    }

    /// 是否存在可用更新
    pub fn has_updates(&self) -> bool {
        !self.updates.is_empty()
    }
}
