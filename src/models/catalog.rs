//! 远程目录数据模型
//!
//! 目录API响应的反序列化结构:
//! - `ApiResponse<T>`: 统一的 `{"result": [...]}` 响应信封
//! - `CatalogPackage`: 单个可用安装包条目
//!
//! 字段命名与目录API的JSON键保持一致,不在DTO层做业务加工。

use serde::{Deserialize, Serialize};

use crate::models::distribution::Distribution;
use crate::models::version::{ReleaseStatus, VersionNumber};

/// 目录API响应信封
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Vec<T>,
}

/// 目录中的单个安装包条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPackage {
    /// 发行版键 (如 "temurin")
    pub distribution: String,

    /// 完整版本字符串 (如 "17.0.2+8", "21-ea+27")
    pub java_version: String,

    /// 主版本号
    pub major_version: u32,

    /// 发布状态键 ("ga" / "ea")
    pub release_status: String,

    /// 是否为该主版本下最新可用build
    #[serde(default)]
    pub latest_build_available: bool,

    /// 归档类型 (如 "tar.gz", "zip"),目录可能缺省
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_type: Option<String>,
}

impl CatalogPackage {
    /// 解析条目的结构化版本号
    ///
    /// `java_version` 不可解析时返回默认值,由调用方过滤
    pub fn parsed_version(&self) -> VersionNumber {
        let mut version = VersionNumber::parse(&self.java_version);
        // 目录的release_status字段比字符串后缀更权威
        if let Some(status) = ReleaseStatus::from_api_string(&self.release_status) {
            version = version.with_release_status(status);
        }
        version
    }

    /// 条目所属发行版
    pub fn parsed_distribution(&self) -> Distribution {
        Distribution::from_api_string(&self.distribution)
    }

    /// 是否为EA条目
    pub fn is_early_access(&self) -> bool {
        matches!(
            ReleaseStatus::from_api_string(&self.release_status),
            Some(ReleaseStatus::EarlyAccess)
        )
    }
}
