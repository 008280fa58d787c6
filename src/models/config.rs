//! 扫描与目录配置模型
//!
//! `RadarConfig` 汇总运行所需的全部配置项,取值来源为 `.env`
//! 文件与环境变量 (由 `ConfigService` 负责读写):
//! - RADAR_CATALOG_URL: 远程目录API基地址
//! - RADAR_SCAN_ROOTS: 附加扫描根目录 (分号分隔)
//! - RADAR_INCLUDE_EA: 是否将EA条目纳入更新候选
//! - RADAR_HTTP_TIMEOUT_SECS: 目录请求超时秒数

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::errors::ConfigError;

/// 默认目录API基地址 (disco风格)
pub const DEFAULT_CATALOG_URL: &str = "https://api.foojay.io/disco/v3.0";

/// 默认HTTP超时秒数
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// 运行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    /// 目录API基地址
    pub catalog_url: String,

    /// 扫描根目录 (平台默认 + 用户附加)
    pub scan_roots: Vec<PathBuf>,

    /// 是否将EA条目纳入更新候选
    ///
    /// 为false时EA条目仅在本机安装本身是EA时参与比较
    pub include_early_access: bool,

    /// 目录请求超时秒数
    pub http_timeout_secs: u64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            scan_roots: default_scan_roots(),
            include_early_access: false,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl RadarConfig {
    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "RADAR_CATALOG_URL".to_string(),
                value: self.catalog_url.clone(),
            });
        }
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "RADAR_HTTP_TIMEOUT_SECS".to_string(),
                value: self.http_timeout_secs.to_string(),
            });
        }
        for root in &self.scan_roots {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "RADAR_SCAN_ROOTS".to_string(),
                    value: String::new(),
                });
            }
        }
        Ok(())
    }
}

/// 平台默认扫描根目录
///
/// 覆盖各平台的常见JDK安装位置与SDK管理器目录,
/// 不存在的目录由扫描阶段静默跳过。
pub fn default_scan_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::new();

    if cfg!(target_os = "windows") {
        roots.push(PathBuf::from(r"C:\Program Files\Java"));
        roots.push(PathBuf::from(r"C:\Program Files\Eclipse Adoptium"));
        roots.push(PathBuf::from(r"C:\Program Files\Zulu"));
        roots.push(PathBuf::from(r"C:\Program Files\Amazon Corretto"));
        roots.push(PathBuf::from(r"C:\Program Files\Microsoft"));
    } else if cfg!(target_os = "macos") {
        roots.push(PathBuf::from("/Library/Java/JavaVirtualMachines"));
        roots.push(PathBuf::from("/System/Library/Java/JavaVirtualMachines"));
        roots.push(PathBuf::from("/opt/homebrew/opt"));
    } else {
        roots.push(PathBuf::from("/usr/lib/jvm"));
        roots.push(PathBuf::from("/usr/java"));
        roots.push(PathBuf::from("/opt/java"));
        roots.push(PathBuf::from("/opt/jdk"));
    }

    // 用户级SDK管理器目录
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".sdkman").join("candidates").join("java"));
        roots.push(home.join(".jdks"));
        roots.push(home.join(".asdf").join("installs").join("java"));
    }

    roots
}
