//! 更新候选筛选测试
//!
//! 覆盖纯函数 `UpdateService::select_update` 的全部筛选规则,
//! 不依赖真实HTTP。

mod common;

use common::{make_jdk, make_package};
use jdk_radar::models::Distribution;
use jdk_radar::services::UpdateService;

#[test]
fn test_selects_newest_strictly_greater_version() {
    let installed = make_jdk("/usr/lib/jvm/temurin-17/bin/java", Distribution::Temurin, "17.0.2");
    let packages = vec![
        make_package(Distribution::Temurin, "17.0.1+12", 17, "ga"),
        make_package(Distribution::Temurin, "17.0.10+7", 17, "ga"),
        make_package(Distribution::Temurin, "17.0.5+8", 17, "ga"),
    ];

    let candidate = UpdateService::select_update(&installed, &packages, false)
        .expect("应找到更新候选");
    assert_eq!(candidate.package.java_version, "17.0.10+7");
    assert_eq!(candidate.available_version.update(), 10);
    assert!(candidate.describe().contains("17.0.2"));
}

#[test]
fn test_no_update_when_already_latest() {
    let installed = make_jdk("/opt/jdk/bin/java", Distribution::Zulu, "17.0.10");
    let packages = vec![
        make_package(Distribution::Zulu, "17.0.10+7", 17, "ga"),
        make_package(Distribution::Zulu, "17.0.9+9", 17, "ga"),
    ];

    // 17.0.10+7 与 17.0.10 在非EA语境下元组相等,不构成严格更新
    assert!(UpdateService::select_update(&installed, &packages, false).is_none());
}

#[test]
fn test_ea_packages_excluded_for_ga_install() {
    let installed = make_jdk("/opt/jdk/bin/java", Distribution::Temurin, "21.0.1");
    let packages = vec![make_package(Distribution::Temurin, "22-ea+17", 22, "ea")];

    assert!(UpdateService::select_update(&installed, &packages, false).is_none());
    // 配置放开后EA条目参与
    assert!(UpdateService::select_update(&installed, &packages, true).is_some());
}

#[test]
fn test_ea_install_accepts_newer_ea_build() {
    let installed = make_jdk("/opt/jdk/bin/java", Distribution::Temurin, "22-ea+17");
    let packages = vec![
        make_package(Distribution::Temurin, "22-ea+25", 22, "ea"),
        make_package(Distribution::Temurin, "22-ea+12", 22, "ea"),
    ];

    let candidate = UpdateService::select_update(&installed, &packages, false)
        .expect("EA安装应接受更新的EA build");
    assert_eq!(candidate.package.java_version, "22-ea+25");
}

#[test]
fn test_unparseable_package_version_skipped() {
    let installed = make_jdk("/opt/jdk/bin/java", Distribution::Temurin, "17.0.2");
    let packages = vec![
        make_package(Distribution::Temurin, "not a version", 17, "ga"),
        make_package(Distribution::Temurin, "17.0.3+5", 17, "ga"),
    ];

    let candidate = UpdateService::select_update(&installed, &packages, false)
        .expect("应跳过不可解析条目");
    assert_eq!(candidate.package.java_version, "17.0.3+5");
}

#[test]
fn test_empty_catalog_yields_no_candidate() {
    let installed = make_jdk("/opt/jdk/bin/java", Distribution::Temurin, "17.0.2");
    assert!(UpdateService::select_update(&installed, &[], false).is_none());
}
