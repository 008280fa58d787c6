//! 测试公共模块
//!
//! 提供目录条目与检测记录的构造工具,遵循优雅即简约的原则。
//! 每个构造器都服务于更新检查测试,避免外部依赖 (无真实HTTP/文件系统)。

use jdk_radar::models::{CatalogPackage, DetectedJdk, Distribution, VersionNumber};

/// 构造目录安装包条目
pub fn make_package(
    distribution: Distribution,
    java_version: &str,
    major_version: u32,
    release_status: &str,
) -> CatalogPackage {
    CatalogPackage {
        distribution: distribution.api_string().to_string(),
        java_version: java_version.to_string(),
        major_version,
        release_status: release_status.to_string(),
        latest_build_available: true,
        archive_type: Some("tar.gz".to_string()),
    }
}

/// 构造本机检测记录
///
/// `version_text` 经真实的版本引擎解析,保证测试覆盖解析路径
pub fn make_jdk(path: &str, distribution: Distribution, version_text: &str) -> DetectedJdk {
    DetectedJdk::new(
        path.to_string(),
        distribution,
        VersionNumber::parse(version_text),
        format!("openjdk version \"{}\"", version_text),
    )
}
