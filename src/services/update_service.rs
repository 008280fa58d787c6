//! 更新检查服务
//!
//! 将本机检测结果与远程目录比对,判定"是否存在更新版本":
//! - 逐个安装拉取同发行版+同主版本的目录条目
//! - 候选版本经版本引擎解析后用全序比较筛选
//! - EA条目默认排除,仅当本机安装本身为EA (或配置放开) 时参与
//!
//! 候选筛选是纯函数 (`select_update`),不依赖HTTP,便于测试。

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::{CatalogError, CatalogPackage, DetectedJdk, UpdateCandidate, VersionNumber};
use crate::services::catalog_service::CatalogService;

/// 更新检查服务
pub struct UpdateService {
    catalog: Arc<CatalogService>,
    include_early_access: bool,
}

impl UpdateService {
    /// 创建新的更新检查服务
    pub fn new(catalog: Arc<CatalogService>, include_early_access: bool) -> Self {
        Self {
            catalog,
            include_early_access,
        }
    }

    /// 检查全部本机安装
    ///
    /// 单个安装的目录查询失败只记录日志,不影响其余安装的检查。
    pub async fn check_all(&self, detected: &[DetectedJdk]) -> Vec<UpdateCandidate> {
        let mut updates = Vec::new();

        for jdk in detected {
            match self.check_single(jdk).await {
                Ok(Some(candidate)) => {
                    info!(
                        path = %candidate.installed.java_path,
                        upgrade = %candidate.describe(),
                        "发现可用更新"
                    );
                    updates.push(candidate);
                }
                Ok(None) => {
                    debug!(path = %jdk.java_path, "已是最新或不可检查");
                }
                Err(e) => {
                    warn!(path = %jdk.java_path, error = %e, "更新检查失败");
                }
            }
        }

        // 统计检查结果
        info!(
            "更新检查完成: 共 {} 个安装, {} 个有可用更新",
            detected.len(),
            updates.len()
        );

        updates
    }

    /// 检查单个安装
    async fn check_single(
        &self,
        jdk: &DetectedJdk,
    ) -> Result<Option<UpdateCandidate>, CatalogError> {
        if !jdk.distribution.is_updatable() {
            debug!(path = %jdk.java_path, "发行版无法识别,跳过更新检查");
            return Ok(None);
        }
        if !jdk.has_known_version() {
            debug!(path = %jdk.java_path, "版本未知,跳过更新检查");
            return Ok(None);
        }

        let feature = jdk.version.feature().unwrap_or(0);
        let packages = self.catalog.fetch_packages(jdk.distribution, feature).await?;

        Ok(Self::select_update(jdk, &packages, self.include_early_access))
    }

    /// 从目录条目中筛选严格更新的最高版本
    ///
    /// 规则:
    /// - EA条目仅在 `include_early_access` 或本机安装为EA时参与
    /// - 版本不可解析的条目跳过
    /// - 仅保留比本机版本严格更大的条目,取其中最大者
    pub fn select_update(
        installed: &DetectedJdk,
        packages: &[CatalogPackage],
        include_early_access: bool,
    ) -> Option<UpdateCandidate> {
        let allow_ea = include_early_access || installed.is_early_access();
        let mut best: Option<(VersionNumber, CatalogPackage)> = None;

        for package in packages {
            if package.is_early_access() && !allow_ea {
                continue;
            }

            let version = package.parsed_version();
            if version.is_empty() {
                continue;
            }
            if version.compare(&installed.version) != Ordering::Greater {
                continue;
            }

            let is_better = match &best {
                None => true,
                Some((current_best, _)) => version.compare(current_best) == Ordering::Greater,
            };
            if is_better {
                best = Some((version, package.clone()));
            }
        }

        best.map(|(available_version, package)| UpdateCandidate {
            installed: installed.clone(),
            available_version,
            package,
        })
    }
}
