//! 服务层模块
//!
//! 包含所有业务逻辑服务:
//! - `finder_service`: JDK扫描服务,定位并探测本机安装
//! - `catalog_service`: 远程目录客户端,查询可用安装包
//! - `update_service`: 更新检查服务,比对本机与目录版本
//! - `config_service`: 配置服务,管理 .env 配置读写
//!
//! # 设计原则
//!
//! 1. **存在即合理**: 每个服务都有单一职责,互不重叠
//! 2. **优雅即简约**: 方法签名清晰,易于理解和使用
//! 3. **性能即艺术**: 扫描与探测并发执行,目录请求带超时
//! 4. **错误处理**: 所有外部调用都有完整错误处理和日志
//! 5. **日志安全**: 记录路径与版本,不记录用户环境的其余信息
//!
//! # 服务架构
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │              main                  │
//! └───────────────┬────────────────────┘
//!                 │
//!                 ▼
//! ┌────────────────────────────────────┐
//! │          Services Layer            │
//! │  ┌──────────────┐ ┌─────────────┐  │
//! │  │ FinderService │ │UpdateService│  │
//! │  └──────┬───────┘ └──────┬──────┘  │
//! │         │                │         │
//! │         │      ┌─────────▼──────┐  │
//! │         │      │ CatalogService │  │
//! │         │      └────────────────┘  │
//! └─────────┼───────────────┼──────────┘
//!           ▼               ▼
//!     文件系统 + java    远程目录API
//! ```

pub mod catalog_service;
pub mod config_service;
pub mod finder_service;
pub mod update_service;

// 重导出常用类型,简化外部引用
pub use catalog_service::CatalogService;
pub use config_service::ConfigService;
pub use finder_service::FinderService;
pub use update_service::UpdateService;
