//! 已安装JDK数据模型
//!
//! `DetectedJdk` 代表一次扫描中定位并探测成功的本机JDK安装。
//! 每条记录都是独立的、可复制的值,扫描完成后不再修改。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::distribution::Distribution;
use crate::models::version::{FormatStyle, VersionNumber};

/// 本机检测到的JDK安装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedJdk {
    /// java可执行文件的规范化绝对路径
    pub java_path: String,

    /// 识别出的发行版
    pub distribution: Distribution,

    /// 结构化版本号 (探测输出不可解析时为默认值)
    pub version: VersionNumber,

    /// `java -version` 输出的原始首行,用于诊断与展示
    pub vendor_line: String,

    /// 探测完成时间
    pub detected_at: DateTime<Utc>,
}

impl DetectedJdk {
    /// 创建新的检测记录
    pub fn new(
        java_path: String,
        distribution: Distribution,
        version: VersionNumber,
        vendor_line: String,
    ) -> Self {
        Self {
            java_path,
            distribution,
            version,
            vendor_line,
            detected_at: Utc::now(),
        }
    }

    /// 版本是否解析成功
    pub fn has_known_version(&self) -> bool {
        !self.version.is_empty()
    }

    /// 是否为EA安装
    pub fn is_early_access(&self) -> bool {
        self.version.is_early_access()
    }

    /// 展示用版本字符串 (去尾零,含后缀)
    pub fn display_version(&self) -> String {
        if self.version.is_empty() {
            return "unknown".to_string();
        }
        self.version.format(FormatStyle::Reduced, true, true)
    }
}
