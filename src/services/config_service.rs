//! 配置服务
//!
//! 管理运行配置的持久化,职责单一:
//! - 从 .env 文件加载配置 (文件不存在时返回默认配置)
//! - 保存配置到 .env 文件,保留原有注释与无关配置项
//! - 进程环境变量优先于文件内容,便于临时覆盖

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::models::config::{DEFAULT_CATALOG_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::models::{ConfigError, RadarConfig};

/// 配置服务
pub struct ConfigService;

impl ConfigService {
    /// 获取 .env 文件路径
    ///
    /// 查找顺序:
    /// 1. 当前工作目录的 .env
    /// 2. 上层目录 (项目根目录)
    fn env_file_path() -> Result<PathBuf, ConfigError> {
        let cwd = env::current_dir()
            .map_err(|e| ConfigError::IoError(format!("无法获取当前目录: {}", e)))?;

        let env_path = cwd.join(".env");
        if env_path.exists() {
            return Ok(env_path);
        }

        if let Some(parent) = cwd.parent() {
            let parent_env = parent.join(".env");
            if parent_env.exists() {
                return Ok(parent_env);
            }
        }

        // 不存在则创建在当前目录
        Ok(env_path)
    }

    /// 解析 .env 文件内容为 HashMap
    ///
    /// 格式: KEY=VALUE
    /// 忽略空行和注释行(以 # 开头)
    pub fn parse_env_content(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                // 忽略空行和注释
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    return None;
                }

                trimmed
                    .split_once('=')
                    .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            })
            .collect()
    }

    /// 将更新项合并进 .env 文件内容
    ///
    /// 保留原有的注释和空行,仅更新指定的配置项,新键追加到末尾
    pub fn serialize_env_content(
        original_content: &str,
        updated_vars: &HashMap<String, String>,
    ) -> String {
        let mut result = String::new();
        let mut updated_keys = updated_vars.keys().cloned().collect::<Vec<_>>();

        for line in original_content.lines() {
            let trimmed = line.trim();

            // 保留空行和注释
            if trimmed.is_empty() || trimmed.starts_with('#') {
                result.push_str(line);
                result.push('\n');
                continue;
            }

            if let Some((key, _)) = trimmed.split_once('=') {
                let key = key.trim();
                if let Some(new_value) = updated_vars.get(key) {
                    result.push_str(&format!("{}={}\n", key, new_value));
                    updated_keys.retain(|k| k != key);
                    continue;
                }
            }

            result.push_str(line);
            result.push('\n');
        }

        for key in updated_keys {
            if let Some(value) = updated_vars.get(&key) {
                result.push_str(&format!("{}={}\n", key, value));
            }
        }

        result
    }

    /// 从默认位置加载配置
    pub fn load_config() -> Result<RadarConfig, ConfigError> {
        let env_path = Self::env_file_path()?;
        Self::load_config_from(&env_path)
    }

    /// 从指定 .env 文件加载配置
    ///
    /// 读取配置项:
    /// - RADAR_CATALOG_URL: 目录API基地址
    /// - RADAR_SCAN_ROOTS: 附加扫描根目录 (分号分隔,追加到平台默认)
    /// - RADAR_INCLUDE_EA: 是否纳入EA条目 (true/false)
    /// - RADAR_HTTP_TIMEOUT_SECS: 请求超时秒数
    ///
    /// # 错误处理
    /// - 文件不存在时返回默认配置(不报错)
    /// - 文件读取失败时返回 IoError
    /// - 超时秒数格式错误时返回 InvalidValue
    pub fn load_config_from(env_path: &std::path::Path) -> Result<RadarConfig, ConfigError> {
        let mut vars = if env_path.exists() {
            let content = fs::read_to_string(env_path)?;
            Self::parse_env_content(&content)
        } else {
            tracing::info!(
                path = %env_path.display(),
                "配置文件不存在,使用默认配置"
            );
            HashMap::new()
        };

        // 进程环境变量优先于文件内容
        for key in [
            "RADAR_CATALOG_URL",
            "RADAR_SCAN_ROOTS",
            "RADAR_INCLUDE_EA",
            "RADAR_HTTP_TIMEOUT_SECS",
        ] {
            if let Ok(value) = env::var(key) {
                vars.insert(key.to_string(), value);
            }
        }

        let mut config = RadarConfig::default();

        if let Some(url) = vars.get("RADAR_CATALOG_URL") {
            if !url.trim().is_empty() {
                config.catalog_url = url.trim().to_string();
            }
        }

        if let Some(roots) = vars.get("RADAR_SCAN_ROOTS") {
            for root in roots.split(';') {
                let trimmed = root.trim();
                if !trimmed.is_empty() {
                    config.scan_roots.push(PathBuf::from(trimmed));
                }
            }
        }

        if let Some(include_ea) = vars.get("RADAR_INCLUDE_EA") {
            config.include_early_access = matches!(
                include_ea.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "yes"
            );
        }

        if let Some(timeout) = vars.get("RADAR_HTTP_TIMEOUT_SECS") {
            config.http_timeout_secs =
                timeout
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "RADAR_HTTP_TIMEOUT_SECS".to_string(),
                        value: timeout.clone(),
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// 保存配置到指定 .env 文件
    ///
    /// 仅写出与默认值不同语义的键,保留文件中其他配置项不变
    pub fn save_config_to(
        env_path: &std::path::Path,
        config: &RadarConfig,
    ) -> Result<(), ConfigError> {
        config.validate()?;

        let original_content = if env_path.exists() {
            fs::read_to_string(env_path)?
        } else {
            String::new()
        };

        let mut updated: HashMap<String, String> = HashMap::new();
        if config.catalog_url != DEFAULT_CATALOG_URL {
            updated.insert("RADAR_CATALOG_URL".to_string(), config.catalog_url.clone());
        }
        updated.insert(
            "RADAR_INCLUDE_EA".to_string(),
            config.include_early_access.to_string(),
        );
        if config.http_timeout_secs != DEFAULT_HTTP_TIMEOUT_SECS {
            updated.insert(
                "RADAR_HTTP_TIMEOUT_SECS".to_string(),
                config.http_timeout_secs.to_string(),
            );
        }

        let content = Self::serialize_env_content(&original_content, &updated);
        fs::write(env_path, content)?;

        tracing::info!(path = %env_path.display(), "配置已保存");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_content_skips_comments() {
        let content = "# 注释行\n\nRADAR_INCLUDE_EA=true\nRADAR_HTTP_TIMEOUT_SECS = 30\n";
        let vars = ConfigService::parse_env_content(content);

        assert_eq!(vars.get("RADAR_INCLUDE_EA"), Some(&"true".to_string()));
        assert_eq!(
            vars.get("RADAR_HTTP_TIMEOUT_SECS"),
            Some(&"30".to_string())
        );
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_serialize_env_content_preserves_comments() {
        let original = "# 目录配置\nRADAR_INCLUDE_EA=false\nOTHER_KEY=keep\n";
        let mut updated = HashMap::new();
        updated.insert("RADAR_INCLUDE_EA".to_string(), "true".to_string());
        updated.insert("RADAR_HTTP_TIMEOUT_SECS".to_string(), "30".to_string());

        let result = ConfigService::serialize_env_content(original, &updated);

        assert!(result.contains("# 目录配置"));
        assert!(result.contains("RADAR_INCLUDE_EA=true"));
        assert!(result.contains("OTHER_KEY=keep"));
        assert!(result.contains("RADAR_HTTP_TIMEOUT_SECS=30"));
    }
}
