use crate::models::RadarConfig;
use crate::services::{CatalogService, FinderService, UpdateService};
use std::sync::Arc;

/// 应用全局状态
///
/// 存在即合理: 每个字段代表应用核心能力的单一来源
/// - finder: 本机JDK的唯一发现渠道
/// - catalog: 远程目录的唯一通信渠道
/// - updater: 版本比对与更新判定的唯一入口
pub struct AppState {
    /// 扫描服务: 唯一的本机JDK发现渠道
    pub finder: Arc<FinderService>,

    /// 目录客户端: 唯一的远程目录通信渠道
    pub catalog: Arc<CatalogService>,

    /// 更新检查服务: 唯一的版本比对入口
    pub updater: Arc<UpdateService>,

    /// 生效的运行配置
    pub config: RadarConfig,
}

impl AppState {
    /// 从配置初始化应用状态
    ///
    /// # 错误处理
    /// 目录客户端初始化失败将导致整个应用无法启动 -
    /// 没有目录就没有更新检查,不完整的状态等同于无用
    pub fn new(config: RadarConfig) -> Result<Self, Box<dyn std::error::Error>> {
        config.validate()?;

        let finder = Arc::new(FinderService::new(config.scan_roots.clone()));
        let catalog = Arc::new(CatalogService::new(
            &config.catalog_url,
            config.http_timeout_secs,
        )?);
        let updater = Arc::new(UpdateService::new(
            Arc::clone(&catalog),
            config.include_early_access,
        ));

        Ok(Self {
            finder,
            catalog,
            updater,
            config,
        })
    }
}
