//! 远程目录客户端
//!
//! 调用disco风格的JDK目录API,按发行版+主版本查询可用安装包。
//!
//! 职责:
//! - 构造带超时的HTTP客户端 (rustls,无系统OpenSSL依赖)
//! - 拉取并反序列化 `{"result": [...]}` 响应信封
//! - 将网络/状态码/解析失败映射为结构化错误

use std::time::Duration;

use crate::models::{ApiResponse, CatalogError, CatalogPackage, Distribution};

/// 远程目录客户端
pub struct CatalogService {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogService {
    /// 创建新的目录客户端
    ///
    /// # 参数
    /// - `base_url`: 目录API基地址 (末尾斜杠会被剥掉)
    /// - `timeout_secs`: 单次请求超时秒数
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| CatalogError::NetworkFailed(e.to_string()))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::info!(base_url = %base_url, "目录客户端初始化完成");

        Ok(Self { client, base_url })
    }

    /// 查询指定发行版+主版本的可用安装包
    ///
    /// # 错误
    /// - `CatalogError::DistributionNotFound`: 发行版没有目录键
    /// - `CatalogError::NetworkFailed`: 请求超时或连接失败
    /// - `CatalogError::HttpStatusError`: 非200状态码
    /// - `CatalogError::JsonParseFailed`: 响应解析失败
    pub async fn fetch_packages(
        &self,
        distribution: Distribution,
        feature: u32,
    ) -> Result<Vec<CatalogPackage>, CatalogError> {
        if !distribution.is_updatable() {
            return Err(CatalogError::DistributionNotFound(
                distribution.display_name().to_string(),
            ));
        }

        let url = format!(
            "{}/packages?distribution={}&version={}&package_type=jdk",
            self.base_url,
            distribution.api_string(),
            feature
        );

        tracing::debug!(url = %url, "查询目录安装包");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "目录API返回错误状态");
            return Err(CatalogError::HttpStatusError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::NetworkFailed(e.to_string()))?;
        let packages = Self::parse_envelope(&body)?;

        tracing::debug!(
            distribution = distribution.api_string(),
            feature = feature,
            count = packages.len(),
            "目录查询完成"
        );

        Ok(packages)
    }

    /// 反序列化 `{"result": [...]}` 响应信封
    fn parse_envelope(body: &str) -> Result<Vec<CatalogPackage>, CatalogError> {
        let envelope: ApiResponse<CatalogPackage> = serde_json::from_str(body)?;
        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_extracts_packages() {
        let body = r#"{
            "result": [
                {
                    "distribution": "temurin",
                    "java_version": "17.0.10+7",
                    "major_version": 17,
                    "release_status": "ga",
                    "latest_build_available": true,
                    "archive_type": "tar.gz"
                }
            ]
        }"#;

        let packages = CatalogService::parse_envelope(body).expect("信封解析失败");
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].java_version, "17.0.10+7");
        assert_eq!(packages[0].parsed_distribution(), Distribution::Temurin);
    }

    #[test]
    fn test_parse_envelope_rejects_malformed_body() {
        let result = CatalogService::parse_envelope("这不是JSON");
        assert!(matches!(result, Err(CatalogError::JsonParseFailed(_))));
    }
}
