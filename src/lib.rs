//! jdk-radar 核心库
//!
//! 发现本机安装的JDK发行版,并与远程目录比对检查可用更新。
//!
//! # 模块结构
//!
//! - `models`: 数据模型 (版本号引擎、发行版、检测记录、目录DTO、配置、错误)
//! - `services`: 业务服务 (扫描、目录客户端、更新检查、配置读写)
//! - `utils`: 工具 (日志初始化)
//! - `state`: 应用全局状态装配
//!
//! # 使用示例
//!
//! ```no_run
//! use jdk_radar::models::{RadarConfig, RadarReport};
//! use jdk_radar::state::AppState;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(RadarConfig::default())?;
//!
//! // 扫描本机JDK
//! let detected = state.finder.scan().await?;
//!
//! // 检查可用更新
//! let updates = state.updater.check_all(&detected).await;
//! let report = RadarReport::new(detected, updates);
//!
//! if report.has_updates() {
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// 重导出高频类型,简化外部引用
pub use models::{
    CatalogPackage, DetectedJdk, Distribution, FormatStyle, RadarConfig, RadarReport,
    ReleaseStatus, UpdateCandidate, VersionNumber,
};
pub use state::AppState;
