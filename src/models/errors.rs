//! 错误类型定义
//!
//! 处理版本解析、JDK扫描、远程目录访问与配置加载的失败场景。
//! 每个错误都包含足够的上下文信息,帮助调试和恢复。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 版本号构造相关错误
///
/// 仅针对程序性构造的非法入参快速失败;解析失败不属于错误,
/// 解析器对不可识别输入降级为默认值。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum VersionError {
    /// feature字段非法
    ///
    /// 真实版本的feature必须 >= 1
    #[error("feature字段非法: {value} (必须 >= 1)")]
    InvalidFeature { value: i64 },

    /// 字段值为负
    ///
    /// 所有版本字段都是非负整数,负值属于调用方编程错误
    #[error("字段 {field} 不能为负: {value}")]
    NegativeField { field: String, value: i64 },
}

/// JDK扫描相关错误
///
/// 处理文件系统遍历与 `java -version` 探测过程中的失败场景
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ScanError {
    /// 目录遍历失败
    ///
    /// 可能原因:
    /// - 搜索根目录不存在或无读取权限
    /// - 遍历过程中目录被删除
    #[error("目录遍历失败: {path} - {message}")]
    WalkFailed { path: String, message: String },

    /// java可执行文件探测失败
    ///
    /// 执行 `java -version` 失败或无法读取其输出
    #[error("探测失败: {path} - {message}")]
    ProbeFailed { path: String, message: String },

    /// 探测任务panic
    ///
    /// 并发探测任务异常终止
    #[error("探测任务异常终止: {0}")]
    TaskPanicked(String),
}

/// 远程目录访问相关错误
///
/// 处理与JDK目录API交互时的各种失败场景
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum CatalogError {
    /// 网络请求失败
    ///
    /// 可能原因:
    /// - 网络连接中断
    /// - 目录服务器不可达
    /// - DNS解析失败
    #[error("网络请求失败: {0}")]
    NetworkFailed(String),

    /// HTTP状态码错误
    ///
    /// 目录API返回了非200状态码
    #[error("HTTP错误 {status}: {message}")]
    HttpStatusError { status: u16, message: String },

    /// JSON解析失败
    ///
    /// 目录API返回的数据格式不符合预期
    #[error("响应数据解析失败: {0}")]
    JsonParseFailed(String),

    /// 目录中没有该发行版的条目
    ///
    /// 请求的distribution键在目录中不存在
    #[error("目录中未找到发行版: {0}")]
    DistributionNotFound(String),
}

/// 配置加载相关错误
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ConfigError {
    /// 配置文件读写失败
    #[error("配置文件读写失败: {0}")]
    IoError(String),

    /// 配置项取值非法
    ///
    /// 如超时秒数无法解析、扫描根路径为空串
    #[error("配置项非法: {key} = {value}")]
    InvalidValue { key: String, value: String },
}

/// 实现从reqwest::Error到CatalogError的转换
impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::NetworkFailed("请求超时".to_string())
        } else if err.is_connect() {
            CatalogError::NetworkFailed("无法连接到目录服务器".to_string())
        } else {
            CatalogError::NetworkFailed(err.to_string())
        }
    }
}

/// 实现从serde_json::Error到CatalogError的转换
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::JsonParseFailed(err.to_string())
    }
}

/// 实现从std::io::Error到ConfigError的转换
impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}
