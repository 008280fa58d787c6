//! 数据模型模块
//!
//! 包含所有核心数据结构:
//! - version: 版本号核心引擎 (解析、比较、格式化)
//! - distribution: JDK发行版枚举与探测启发式
//! - jdk: 本机检测到的JDK安装记录
//! - catalog: 远程目录API的响应结构
//! - update: 更新检查结果
//! - config: 扫描与目录配置
//! - errors: 错误类型定义 (版本、扫描、目录、配置)
//!
//! # 设计原则
//!
//! 1. **存在即合理**: 每个字段都有明确目的,无冗余
//! 2. **优雅即简约**: 类型名自文档化,代码自我阐述
//! 3. **性能即艺术**: 版本号为可复制的值类型,无共享所有权
//! 4. **错误处理**: 解析降级为默认值,构造器快速失败
//! 5. **日志安全**: 记录路径与版本,不记录用户环境的其余信息

pub mod catalog;
pub mod config;
pub mod distribution;
pub mod errors;
pub mod jdk;
pub mod update;
pub mod version;

// 重导出常用类型,简化外部引用
pub use catalog::{ApiResponse, CatalogPackage};
pub use config::RadarConfig;
pub use distribution::Distribution;
pub use errors::{CatalogError, ConfigError, ScanError, VersionError};
pub use jdk::DetectedJdk;
pub use update::{RadarReport, UpdateCandidate};
pub use version::{FormatStyle, ReleaseStatus, VersionNumber};
