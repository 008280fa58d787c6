//! 发行版识别启发式用例
//!
//! 钉住识别顺序: 厂商fork的输出同样包含 "OpenJDK" 字样,
//! 专有标识必须优先于通用回退。

use jdk_radar::models::Distribution;

#[test]
fn test_detect_temurin_from_version_output() {
    let output = "openjdk version \"17.0.2\" 2022-01-18\n\
                  OpenJDK Runtime Environment Temurin-17.0.2+8 (build 17.0.2+8)";
    assert_eq!(Distribution::from_vendor_text(output), Distribution::Temurin);
}

#[test]
fn test_detect_adoptopenjdk_maps_to_temurin() {
    let output = "OpenJDK Runtime Environment AdoptOpenJDK (build 11.0.11+9)";
    assert_eq!(Distribution::from_vendor_text(output), Distribution::Temurin);
}

#[test]
fn test_detect_zulu() {
    let output = "OpenJDK Runtime Environment Zulu17.32+13-CA (build 17.0.2+8-LTS)";
    assert_eq!(Distribution::from_vendor_text(output), Distribution::Zulu);
}

#[test]
fn test_detect_graalvm_before_openjdk_fallback() {
    let output = "OpenJDK Runtime Environment GraalVM CE 22.0.0.2 (build 17.0.2+8-jvmci-22.0-b05)";
    assert_eq!(Distribution::from_vendor_text(output), Distribution::Graalvm);
}

#[test]
fn test_detect_corretto() {
    let output = "OpenJDK Runtime Environment Corretto-17.0.2.8.1 (build 17.0.2+8-LTS)";
    assert_eq!(Distribution::from_vendor_text(output), Distribution::Corretto);
}

#[test]
fn test_detect_oracle_commercial() {
    let output = "java version \"1.8.0_352\"\n\
                  Java(TM) SE Runtime Environment (build 1.8.0_352-b08)";
    assert_eq!(Distribution::from_vendor_text(output), Distribution::Oracle);
}

#[test]
fn test_detect_plain_openjdk_fallback() {
    let output = "openjdk version \"17.0.2\" 2022-01-18\n\
                  OpenJDK Runtime Environment (build 17.0.2+8-86)";
    assert_eq!(
        Distribution::from_vendor_text(output),
        Distribution::OracleOpenJdk
    );
}

#[test]
fn test_detect_unknown() {
    assert_eq!(
        Distribution::from_vendor_text("some unrelated runtime"),
        Distribution::Unknown
    );
    assert!(!Distribution::Unknown.is_updatable());
}

#[test]
fn test_api_string_round_trip() {
    let all = [
        Distribution::Temurin,
        Distribution::Zulu,
        Distribution::Graalvm,
        Distribution::OracleOpenJdk,
        Distribution::Oracle,
        Distribution::Liberica,
        Distribution::Corretto,
        Distribution::Sapmachine,
        Distribution::Microsoft,
        Distribution::Semeru,
        Distribution::Dragonwell,
        Distribution::Trava,
    ];
    for distribution in all {
        assert_eq!(
            Distribution::from_api_string(distribution.api_string()),
            distribution,
            "api键往返失败: {:?}",
            distribution
        );
    }
}
