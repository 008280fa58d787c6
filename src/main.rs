use jdk_radar::models::RadarReport;
use jdk_radar::services::ConfigService;
use jdk_radar::state::AppState;
use jdk_radar::utils::logger;

#[tokio::main]
async fn main() {
    // 加载 .env 到进程环境 (不存在时忽略)
    dotenvy::dotenv().ok();

    // 初始化日志系统
    logger::init().expect("日志系统初始化失败");

    // 加载配置并装配服务
    let config = ConfigService::load_config().expect("配置加载失败");
    let state = AppState::new(config).expect("应用状态初始化失败");

    // 扫描本机JDK
    let detected = match state.finder.scan().await {
        Ok(detected) => detected,
        Err(e) => {
            tracing::error!(error = %e, "扫描失败");
            std::process::exit(1);
        }
    };

    if detected.is_empty() {
        println!("未检测到任何JDK安装");
        return;
    }

    // 检查可用更新并输出汇总
    let updates = state.updater.check_all(&detected).await;
    let report = RadarReport::new(detected, updates);

    println!("检测到 {} 个JDK安装:", report.detected.len());
    for jdk in &report.detected {
        println!(
            "  {:<28} {:<12} {}",
            jdk.distribution.display_name(),
            jdk.display_version(),
            jdk.java_path
        );
    }

    if report.has_updates() {
        println!("\n{} 个安装有可用更新:", report.updates.len());
        for candidate in &report.updates {
            println!(
                "  {:<28} {}",
                candidate.installed.distribution.display_name(),
                candidate.describe()
            );
        }
    } else {
        println!("\n所有安装均为最新版本");
    }

    // 完整结果同时以JSON输出,便于其他工具消费
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("\n{}", json),
        Err(e) => tracing::error!(error = %e, "汇总结果序列化失败"),
    }
}
