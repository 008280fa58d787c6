//! 工具模块
//!
//! - logger: 日志系统初始化 (控制台 + 按天轮转的JSON文件)

pub mod logger;
