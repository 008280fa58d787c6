//! JDK发行版数据模型
//!
//! 定义多厂商发行版枚举与探测启发式:
//! - `Distribution`: 已知发行版 (Temurin/Zulu/GraalVM/...)
//! - `from_vendor_text`: 从 `java -version` 输出识别发行版
//! - `from_api_string` / `api_string`: 与远程目录的distribution键互转
//!
//! 识别顺序有语义: 厂商fork的输出同样包含 "OpenJDK" 字样,
//! 因此专有标识必须先于通用的OpenJDK回退检查。

use serde::{Deserialize, Serialize};

/// JDK发行版
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Eclipse Temurin (原AdoptOpenJDK)
    Temurin,
    /// Azul Zulu
    Zulu,
    /// GraalVM
    Graalvm,
    /// Oracle OpenJDK构建
    OracleOpenJdk,
    /// Oracle商业JDK
    Oracle,
    /// BellSoft Liberica
    Liberica,
    /// Amazon Corretto
    Corretto,
    /// SAP SapMachine
    Sapmachine,
    /// Microsoft Build of OpenJDK
    Microsoft,
    /// IBM Semeru (OpenJ9)
    Semeru,
    /// Alibaba Dragonwell
    Dragonwell,
    /// Trava OpenJDK
    Trava,
    /// 无法识别的发行版
    Unknown,
}

impl Distribution {
    /// 从 `java -version` 输出识别发行版
    ///
    /// 输入为合并后的版本输出文本 (通常来自stderr)。
    /// 专有标识优先匹配,"OpenJDK" 作为最后的通用回退;
    /// 完全无法识别时返回 `Unknown`,不报错。
    pub fn from_vendor_text(text: &str) -> Self {
        let lowered = text.to_ascii_lowercase();

        if lowered.contains("temurin") || lowered.contains("adoptopenjdk") {
            Distribution::Temurin
        } else if lowered.contains("zulu") {
            Distribution::Zulu
        } else if lowered.contains("graalvm") {
            Distribution::Graalvm
        } else if lowered.contains("corretto") {
            Distribution::Corretto
        } else if lowered.contains("sapmachine") {
            Distribution::Sapmachine
        } else if lowered.contains("microsoft") {
            Distribution::Microsoft
        } else if lowered.contains("semeru") || lowered.contains("openj9") {
            Distribution::Semeru
        } else if lowered.contains("dragonwell") {
            Distribution::Dragonwell
        } else if lowered.contains("trava") {
            Distribution::Trava
        } else if lowered.contains("liberica") || lowered.contains("bellsoft") {
            Distribution::Liberica
        } else if lowered.contains("java(tm)") || lowered.contains("oracle") {
            // Oracle商业JDK的版本行是 java(TM) SE Runtime Environment
            Distribution::Oracle
        } else if lowered.contains("openjdk") {
            Distribution::OracleOpenJdk
        } else {
            Distribution::Unknown
        }
    }

    /// 从目录API的distribution键解析
    pub fn from_api_string(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "temurin" | "adoptopenjdk" => Distribution::Temurin,
            "zulu" => Distribution::Zulu,
            "graalvm" | "graalvm_community" => Distribution::Graalvm,
            "oracle_open_jdk" => Distribution::OracleOpenJdk,
            "oracle" => Distribution::Oracle,
            "liberica" => Distribution::Liberica,
            "corretto" => Distribution::Corretto,
            "sap_machine" | "sapmachine" => Distribution::Sapmachine,
            "microsoft" => Distribution::Microsoft,
            "semeru" => Distribution::Semeru,
            "dragonwell" => Distribution::Dragonwell,
            "trava" => Distribution::Trava,
            _ => Distribution::Unknown,
        }
    }

    /// 目录API使用的distribution键
    pub fn api_string(&self) -> &'static str {
        match self {
            Distribution::Temurin => "temurin",
            Distribution::Zulu => "zulu",
            Distribution::Graalvm => "graalvm",
            Distribution::OracleOpenJdk => "oracle_open_jdk",
            Distribution::Oracle => "oracle",
            Distribution::Liberica => "liberica",
            Distribution::Corretto => "corretto",
            Distribution::Sapmachine => "sap_machine",
            Distribution::Microsoft => "microsoft",
            Distribution::Semeru => "semeru",
            Distribution::Dragonwell => "dragonwell",
            Distribution::Trava => "trava",
            Distribution::Unknown => "unknown",
        }
    }

    /// 人类可读的发行版名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Distribution::Temurin => "Eclipse Temurin",
            Distribution::Zulu => "Azul Zulu",
            Distribution::Graalvm => "GraalVM",
            Distribution::OracleOpenJdk => "Oracle OpenJDK",
            Distribution::Oracle => "Oracle JDK",
            Distribution::Liberica => "BellSoft Liberica",
            Distribution::Corretto => "Amazon Corretto",
            Distribution::Sapmachine => "SapMachine",
            Distribution::Microsoft => "Microsoft Build of OpenJDK",
            Distribution::Semeru => "IBM Semeru",
            Distribution::Dragonwell => "Alibaba Dragonwell",
            Distribution::Trava => "Trava OpenJDK",
            Distribution::Unknown => "Unknown",
        }
    }

    /// 是否可在远程目录中查询更新
    ///
    /// 无法识别的发行版没有可用的目录键
    pub fn is_updatable(&self) -> bool {
        !matches!(self, Distribution::Unknown)
    }
}
