//! JDK扫描服务
//!
//! 负责在本机定位并探测已安装的JDK:
//! - 遍历配置的扫描根目录,定位 `bin/java` 可执行文件
//! - 并发执行 `java -version` 并解析输出
//! - 识别发行版、解析结构化版本号
//! - 按规范化路径去重 (符号链接指向同一安装时只保留一条)
//!
//! 不存在的根目录视为无候选;存在但读不了的根目录属于配置错误,
//! 以 `ScanError::WalkFailed` 上报。

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::models::{DetectedJdk, Distribution, ScanError, VersionNumber};

/// 目录遍历的最大深度
///
/// 覆盖macOS的 `<name>.jdk/Contents/Home/bin/java` 这类最深布局
const MAX_SCAN_DEPTH: usize = 6;

/// JDK扫描服务
pub struct FinderService {
    scan_roots: Vec<PathBuf>,
}

impl FinderService {
    /// 创建新的扫描服务
    pub fn new(scan_roots: Vec<PathBuf>) -> Self {
        Self { scan_roots }
    }

    /// 扫描全部根目录并探测候选JDK
    ///
    /// 不存在的根目录静默跳过;配置的根目录存在但无法读取
    /// (权限不足、根路径是普通文件) 时返回 `WalkFailed`。
    /// 单个候选探测失败只记录日志,不影响整体扫描结果;
    /// 探测任务panic返回 `TaskPanicked`。输出按路径排序。
    pub async fn scan(&self) -> Result<Vec<DetectedJdk>, ScanError> {
        info!("开始扫描 {} 个根目录", self.scan_roots.len());

        // 并发遍历全部根目录
        let walks = self
            .scan_roots
            .iter()
            .map(|root| Self::collect_java_binaries(root.clone(), MAX_SCAN_DEPTH));
        let mut candidates: Vec<PathBuf> = Vec::new();
        for walked in futures::future::join_all(walks).await {
            candidates.extend(walked?);
        }

        // PATH中的java也纳入候选
        if let Ok(path_java) = which::which("java") {
            debug!(path = %path_java.display(), "PATH中找到java");
            candidates.push(path_java);
        }

        // 规范化路径去重,符号链接指向同一安装时只保留一条
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut unique: Vec<PathBuf> = Vec::new();
        for candidate in candidates {
            let canonical = tokio::fs::canonicalize(&candidate)
                .await
                .unwrap_or(candidate);
            if seen.insert(canonical.clone()) {
                unique.push(canonical);
            }
        }

        info!("定位到 {} 个候选java可执行文件", unique.len());

        // 使用 Arc<Mutex<>> 收集并发探测结果,保证线程安全
        let results = Arc::new(Mutex::new(HashMap::new()));
        let total_count = unique.len();
        let mut tasks = Vec::new();

        for (index, java_path) in unique.into_iter().enumerate() {
            let results_ref = results.clone();

            let task = tokio::spawn(async move {
                debug!(
                    path = %java_path.display(),
                    "开始探测候选JDK (第 {}/{})",
                    index + 1,
                    total_count
                );

                match Self::probe_java(&java_path).await {
                    Ok(jdk) => {
                        info!(
                            path = %jdk.java_path,
                            distribution = jdk.distribution.display_name(),
                            version = %jdk.display_version(),
                            "JDK探测完成"
                        );
                        let mut results_guard = results_ref.lock().await;
                        results_guard.insert(jdk.java_path.clone(), jdk);
                    }
                    Err(e) => {
                        warn!(path = %java_path.display(), error = %e, "候选探测失败,已跳过");
                    }
                }
            });

            tasks.push(task);
        }

        // 等待所有探测任务完成,panic记录第一个并最终上报
        let mut panicked: Option<ScanError> = None;
        for task in tasks {
            if let Err(e) = task.await {
                error!("探测任务发生panic: {}", e);
                panicked.get_or_insert(ScanError::TaskPanicked(e.to_string()));
            }
        }
        if let Some(e) = panicked {
            return Err(e);
        }

        let mut results_guard = results.lock().await;
        let mut detected: Vec<DetectedJdk> =
            results_guard.drain().map(|(_, jdk)| jdk).collect();
        detected.sort_by(|a, b| a.java_path.cmp(&b.java_path));

        info!("扫描完成,检测到 {} 个JDK安装", detected.len());
        Ok(detected)
    }

    /// 深度受限地遍历单个根目录,收集 `bin/java` 可执行文件
    ///
    /// 根目录不存在视为"无候选";根目录存在但读取失败是配置
    /// 问题,上报 `WalkFailed`。更深层目录的读取失败静默跳过。
    async fn collect_java_binaries(
        root: PathBuf,
        max_depth: usize,
    ) -> Result<Vec<PathBuf>, ScanError> {
        let mut found = Vec::new();
        let mut queue: Vec<(PathBuf, usize)> = vec![(root, 0)];

        while let Some((dir, depth)) = queue.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if depth == 0 && e.kind() != std::io::ErrorKind::NotFound => {
                    return Err(ScanError::WalkFailed {
                        path: dir.display().to_string(),
                        message: e.to_string(),
                    });
                }
                Err(_) => continue,
            };

            while let Ok(Some(entry)) = entries.next_entry().await {
                let path = entry.path();
                let metadata = match tokio::fs::metadata(&path).await {
                    Ok(metadata) => metadata,
                    Err(_) => continue,
                };

                if metadata.is_dir() {
                    if depth < max_depth {
                        queue.push((path, depth + 1));
                    }
                } else if metadata.is_file() && Self::is_java_binary(&path) {
                    found.push(path);
                }
            }
        }

        Ok(found)
    }

    /// 候选路径是否为 `bin/java` 可执行文件
    fn is_java_binary(path: &Path) -> bool {
        let expected = if cfg!(target_os = "windows") {
            "java.exe"
        } else {
            "java"
        };
        let name_matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name == expected)
            .unwrap_or(false);
        let in_bin = path
            .parent()
            .and_then(|parent| parent.file_name())
            .and_then(|name| name.to_str())
            .map(|name| name == "bin")
            .unwrap_or(false);
        name_matches && in_bin
    }

    /// 探测单个java可执行文件
    ///
    /// `java -version` 将版本信息写到stderr,stdout为空;
    /// 两者合并后交给解析,兼容重定向了输出的特殊发行版。
    async fn probe_java(java_path: &Path) -> Result<DetectedJdk, ScanError> {
        let output = tokio::process::Command::new(java_path)
            .arg("-version")
            .output()
            .await
            .map_err(|e| ScanError::ProbeFailed {
                path: java_path.display().to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ScanError::ProbeFailed {
                path: java_path.display().to_string(),
                message: format!("java -version 退出码非零: {}", output.status),
            });
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let combined = if stderr.trim().is_empty() {
            stdout.to_string()
        } else {
            stderr.to_string()
        };

        Ok(Self::parse_probe_output(java_path, &combined))
    }

    /// 从 `java -version` 输出构造检测记录
    ///
    /// 版本不可解析时降级为未知版本记录,调用方视为"未知版本"
    /// 而不是探测失败。
    pub fn parse_probe_output(java_path: &Path, output: &str) -> DetectedJdk {
        let vendor_line = output.lines().next().unwrap_or("").trim().to_string();
        let distribution = Distribution::from_vendor_text(output);
        let version = VersionNumber::parse(output);

        if version.is_empty() {
            warn!(
                path = %java_path.display(),
                "无法从探测输出解析版本号"
            );
        }

        DetectedJdk::new(
            java_path.display().to_string(),
            distribution,
            version,
            vendor_line,
        )
    }
}
