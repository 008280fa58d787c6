//! 版本号核心引擎
//!
//! 解析多厂商JDK版本字符串并定义全序比较:
//! - `VersionNumber`: 六段式版本号 (feature/interim/update/patch/fifth/sixth)
//! - `ReleaseStatus`: 发布状态 (GA/EA)
//! - `FormatStyle`: 输出格式 (Reduced/Full)
//!
//! # 设计原则
//!
//! 1. **存在即合理**: 每个字段对应Java版本方案中的一个真实层级
//! 2. **优雅即简约**: 形状判定使用具名枚举,不依赖捕获组下标
//! 3. **性能即艺术**: 组合正则进程级编译一次,解析过程无共享可变状态
//! 4. **错误处理**: 解析失败降级为默认值,仅构造器对非法入参快速失败
//!
//! # 版本形状
//!
//! Java生态的版本字符串没有统一结构,同一个引擎需要覆盖:
//! - 纯feature: `17`
//! - 点分2~6段: `17.0`, `17.0.2`, `17.0.2.1`, `17.0.2.1.3.4`
//! - 旧式update语法: `8u352`, `1.8.0_352`
//! - EA标记与build号后缀: `17-ea`, `17-ea+5`, `17.0.2+8`

use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::models::errors::VersionError;

/// 组合版本号正则
///
/// 单一模式覆盖全部数字形状,具名捕获组避免下标脆弱性。
/// `u`分支匹配旧式 `8u352`,点分分支同时接受 `.` 和 `_` 分隔符,
/// 使 `1.8.0_352` 这类历史格式无需特殊通道。
static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<feature>\d+)",
        r"(?:u(?P<lupdate>\d+)",
        r"|[._](?P<interim>\d+)",
        r"(?:[._](?P<update>\d+)",
        r"(?:[._](?P<patch>\d+)",
        r"(?:[._](?P<fifth>\d+)",
        r"(?:[._](?P<sixth>\d+))?",
        r")?)?)?)?",
    ))
    .expect("版本号正则编译失败")
});

/// EA标记正则
///
/// 要求标记前有起始/空白/分隔符边界,避免在 "release" 这类
/// 厂商文案中误触发。可选尾随EA build号 (如 `-ea+5`)。
static EA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|[\s\-_.(\[])ea(?:[-+._]b?(?P<eabuild>\d+))?\b").expect("EA标记正则编译失败"));

/// 独立build号后缀正则
///
/// 覆盖 `+8`, `+b17`, `b17` 三种写法。解析顺序在EA标记之后,
/// 因此独立后缀会覆盖EA携带的build号。
static BUILD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+|\b[bB])(?P<build>\d+)\b").expect("build号正则编译失败"));

/// 发布状态
///
/// 缺失表示"未指明",与GA不等价
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseStatus {
    /// 正式发布版
    #[serde(rename = "ga")]
    GeneralAvailability,
    /// 早期访问版 (预发布)
    #[serde(rename = "ea")]
    EarlyAccess,
}

impl ReleaseStatus {
    /// 从目录API字符串解析发布状态
    pub fn from_api_string(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "ga" | "general_availability" => Some(ReleaseStatus::GeneralAvailability),
            "ea" | "early_access" => Some(ReleaseStatus::EarlyAccess),
            _ => None,
        }
    }

}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// 去掉尾随零字段,但始终保留feature
    Reduced,
    /// 固定输出全部字段 (java风格时为4段,否则6段)
    Full,
}

/// 版本号匹配形状
///
/// 正则的互斥捕获组组合对应一个具名形状,每个形状携带
/// 自己的字段提取逻辑,未覆盖的字段在提取时保持缺失。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VersionShape {
    /// `17`
    FeatureOnly,
    /// `8u352`
    LegacyUpdate,
    /// `17.0`
    FeatureInterim,
    /// `17.0.2` / `8.0_352`
    FeatureInterimUpdate,
    /// `17.0.2.1`
    FeatureInterimUpdatePatch,
    /// `17.0.2.1.3`
    FivePart,
    /// `17.0.2.1.3.4`
    SixPart,
}

impl VersionShape {
    /// 根据捕获组组合判定形状
    fn classify(caps: &Captures<'_>) -> Self {
        if caps.name("lupdate").is_some() {
            VersionShape::LegacyUpdate
        } else if caps.name("sixth").is_some() {
            VersionShape::SixPart
        } else if caps.name("fifth").is_some() {
            VersionShape::FivePart
        } else if caps.name("patch").is_some() {
            VersionShape::FeatureInterimUpdatePatch
        } else if caps.name("update").is_some() {
            VersionShape::FeatureInterimUpdate
        } else if caps.name("interim").is_some() {
            VersionShape::FeatureInterim
        } else {
            VersionShape::FeatureOnly
        }
    }

    /// 按形状提取字段
    ///
    /// 仅填充形状覆盖的字段,其余保持缺失 (比较与格式化时按0处理)
    fn extract(&self, caps: &Captures<'_>) -> VersionNumber {
        let group = |name: &str| -> Option<u32> {
            caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok())
        };

        let mut version = VersionNumber::default();
        version.feature = group("feature");

        match self {
            VersionShape::FeatureOnly => {}
            VersionShape::LegacyUpdate => {
                // `8u352` 的语义是 8.0.352
                version.interim = Some(0);
                version.update = group("lupdate");
            }
            VersionShape::FeatureInterim => {
                version.interim = group("interim");
            }
            VersionShape::FeatureInterimUpdate => {
                version.interim = group("interim");
                version.update = group("update");
            }
            VersionShape::FeatureInterimUpdatePatch => {
                version.interim = group("interim");
                version.update = group("update");
                version.patch = group("patch");
            }
            VersionShape::FivePart => {
                version.interim = group("interim");
                version.update = group("update");
                version.patch = group("patch");
                version.fifth = group("fifth");
            }
            VersionShape::SixPart => {
                version.interim = group("interim");
                version.update = group("update");
                version.patch = group("patch");
                version.fifth = group("fifth");
                version.sixth = group("sixth");
            }
        }

        version
    }
}

/// 结构化版本号
///
/// 六段式版本元组加可选的build号与发布状态元数据。
/// 默认值 (所有字段缺失) 表示"不可解析",调用方应视为未知版本。
///
/// # 比较关系
///
/// 本类型提供三种相互区别的关系,调用方按需选择:
/// - `compare`: 全序比较,含EA/build决胜逻辑
/// - `is_equivalent`: 宽松相等,仅双方均为EA时才要求build号一致
/// - 派生的 `PartialEq`: 严格逐字段结构相等
///
/// `Ord` 故意不实现: 双EA带build的决胜逻辑对元组结果有最终
/// 决定权,该覆盖行为不满足传递性,不能冒充 `Ord` 契约。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionNumber {
    feature: Option<u32>,
    interim: Option<u32>,
    update: Option<u32>,
    patch: Option<u32>,
    fifth: Option<u32>,
    sixth: Option<u32>,
    build: Option<u32>,
    release_status: Option<ReleaseStatus>,
}

impl VersionNumber {
    /// 创建仅含feature的版本号
    pub fn new(feature: u32) -> Self {
        VersionNumber {
            feature: Some(feature),
            ..VersionNumber::default()
        }
    }

    /// 从原始整数构造四段版本号
    ///
    /// 程序性构造入口,负值与feature<1属于调用方编程错误,
    /// 快速失败而不是降级 (与解析失败的降级语义相区别)。
    pub fn from_parts(
        feature: i64,
        interim: i64,
        update: i64,
        patch: i64,
    ) -> Result<Self, VersionError> {
        Self::from_all_parts(feature, interim, update, patch, 0, 0)
    }

    /// 从原始整数构造六段版本号
    ///
    /// # 错误
    /// - `VersionError::InvalidFeature`: feature < 1
    /// - `VersionError::NegativeField`: 其余字段为负
    pub fn from_all_parts(
        feature: i64,
        interim: i64,
        update: i64,
        patch: i64,
        fifth: i64,
        sixth: i64,
    ) -> Result<Self, VersionError> {
        if feature < 1 {
            return Err(VersionError::InvalidFeature { value: feature });
        }
        let checked = |name: &str, value: i64| -> Result<Option<u32>, VersionError> {
            if value < 0 {
                return Err(VersionError::NegativeField {
                    field: name.to_string(),
                    value,
                });
            }
            Ok(Some(value as u32))
        };

        Ok(VersionNumber {
            feature: Some(feature as u32),
            interim: checked("interim", interim)?,
            update: checked("update", update)?,
            patch: checked("patch", patch)?,
            fifth: checked("fifth", fifth)?,
            sixth: checked("sixth", sixth)?,
            build: None,
            release_status: None,
        })
    }

    /// 附加build号
    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    /// 附加发布状态
    pub fn with_release_status(mut self, status: ReleaseStatus) -> Self {
        self.release_status = Some(status);
        self
    }

    /// 解析自由格式文本中的第一个版本号
    ///
    /// 等价于 `parse_with_index(text, 0)`
    pub fn parse(text: &str) -> Self {
        Self::parse_with_index(text, 0)
    }

    /// 解析文本中指定下标的版本号匹配
    ///
    /// 输入可以是包含版本号的任意文本 (如 `java -version` 输出)。
    /// 同一段文本可能出现多个数字串匹配,`match_index` 选择其中
    /// 一个,越界时回退到0。没有任何匹配时返回默认值,不报错。
    ///
    /// EA标记与独立build号后缀在选中匹配之后的文本中提取;
    /// 两者同时存在时独立后缀最后解析,覆盖EA携带的build号。
    pub fn parse_with_index(text: &str, match_index: usize) -> Self {
        let matches: Vec<Captures<'_>> = VERSION_PATTERN.captures_iter(text).collect();
        if matches.is_empty() {
            return VersionNumber::default();
        }

        // 越界回退到第一个匹配
        let caps = matches.get(match_index).unwrap_or(&matches[0]);
        let full = caps.get(0).map(|m| (m.as_str(), m.end())).unwrap_or(("", 0));

        let mut version = Self::from_match_text(full.0, caps);

        let suffix = &text[full.1..];
        if let Some(ea) = EA_PATTERN.captures(suffix) {
            version.release_status = Some(ReleaseStatus::EarlyAccess);
            if let Some(build) = ea.name("eabuild").and_then(|m| m.as_str().parse::<u32>().ok()) {
                version.build = Some(build);
            }
        }
        if let Some(build) = BUILD_PATTERN
            .captures(suffix)
            .and_then(|caps| caps.name("build"))
            .and_then(|m| m.as_str().parse::<u32>().ok())
        {
            // 独立build后缀覆盖EA build
            version.build = Some(build);
        }

        version
    }

    /// 从单个匹配文本提取数字字段
    ///
    /// 旧式 `1.X` 前缀在此归一化: `1.8.0_352` 剥掉 `1.` 后按
    /// `8.0_352` 重新匹配,使历史编号与现代编号共用同一套形状。
    fn from_match_text(token: &str, caps: &Captures<'_>) -> Self {
        if token.starts_with("1.") {
            if let Some(stripped) = VERSION_PATTERN.captures(&token[2..]) {
                let inner = stripped.get(0).map(|m| m.as_str()).unwrap_or("");
                if !inner.starts_with("1.") {
                    return VersionShape::classify(&stripped).extract(&stripped);
                }
            }
        }
        VersionShape::classify(caps).extract(caps)
    }

    /// 主版本号,缺失表示不可解析
    pub fn feature(&self) -> Option<u32> {
        self.feature
    }

    /// interim字段 (缺失按0)
    pub fn interim(&self) -> u32 {
        self.interim.unwrap_or(0)
    }

    /// update字段 (缺失按0)
    pub fn update(&self) -> u32 {
        self.update.unwrap_or(0)
    }

    /// patch字段 (缺失按0)
    pub fn patch(&self) -> u32 {
        self.patch.unwrap_or(0)
    }

    /// 第五段 (缺失按0)
    pub fn fifth(&self) -> u32 {
        self.fifth.unwrap_or(0)
    }

    /// 第六段 (缺失按0)
    pub fn sixth(&self) -> u32 {
        self.sixth.unwrap_or(0)
    }

    /// build号
    pub fn build(&self) -> Option<u32> {
        self.build
    }

    /// 发布状态
    pub fn release_status(&self) -> Option<ReleaseStatus> {
        self.release_status
    }

    /// 是否为EA版本
    pub fn is_early_access(&self) -> bool {
        matches!(self.release_status, Some(ReleaseStatus::EarlyAccess))
    }

    /// 是否为不可解析的默认值
    pub fn is_empty(&self) -> bool {
        self.feature.is_none()
    }

    /// 匹配形状实际填充的元组字段数量
    ///
    /// 解析时每次只保留一个形状匹配,该计数反映形状覆盖了
    /// 六段元组中的多少段,供测试与格式化参考。
    pub fn populated_fields(&self) -> usize {
        [
            self.feature,
            self.interim,
            self.update,
            self.patch,
            self.fifth,
            self.sixth,
        ]
        .iter()
        .filter(|field| field.is_some())
        .count()
    }

    /// 六段元组 (保留缺失信息)
    fn number_fields(&self) -> [Option<u32>; 6] {
        [
            self.feature,
            self.interim,
            self.update,
            self.patch,
            self.fifth,
            self.sixth,
        ]
    }

    /// 全序比较
    ///
    /// 算法分三步:
    /// 1. 双方均为EA且都带build号时,build号比较具有最终决定权,
    ///    直接覆盖元组比较的结果 ("同版本的更新EA build更新")
    /// 2. 否则按 feature→sixth 顺序逐段数值比较,缺失字段按0
    /// 3. 元组全等时进入build/状态决胜: 双方都有build号按数值比,
    ///    EA无build的一方小于带build的一方,其余情形视为相等
    ///
    /// 满足反对称与自反;因步骤1的覆盖行为不满足传递性,
    /// 故不以 `Ord` 形式暴露。
    pub fn compare(&self, other: &VersionNumber) -> Ordering {
        if self.is_early_access() && other.is_early_access() {
            if let (Some(left), Some(right)) = (self.build, other.build) {
                return left.cmp(&right);
            }
        }

        for (left, right) in self
            .number_fields()
            .into_iter()
            .zip(other.number_fields())
        {
            let ordering = left.unwrap_or(0).cmp(&right.unwrap_or(0));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        match (self.build, other.build) {
            (Some(left), Some(right)) => left.cmp(&right),
            (None, Some(_)) if self.is_early_access() => Ordering::Less,
            (Some(_), None) if other.is_early_access() => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    /// 宽松相等
    ///
    /// 元组逐段相等 (缺失按0) 即视为相等;仅当双方都是EA时
    /// 才额外要求build号一致。非EA版本间build号差异被忽略。
    /// 该关系比 `compare == Equal` 更宽,比派生 `PartialEq` 更松,
    /// 调用方依赖哪种关系由调用点决定。
    pub fn is_equivalent(&self, other: &VersionNumber) -> bool {
        let tuples_equal = self
            .number_fields()
            .into_iter()
            .zip(other.number_fields())
            .all(|(left, right)| left.unwrap_or(0) == right.unwrap_or(0));
        if !tuples_equal {
            return false;
        }
        if self.is_early_access() && other.is_early_access() {
            return self.build == other.build;
        }
        true
    }

    /// 格式化输出
    ///
    /// - `Full`: 固定全段输出,缺失字段补0 (java风格4段,否则6段)
    /// - `Reduced`: 只输出到最后一个非零字段,feature始终保留
    /// - `include_suffix`: 追加 `-ea` (EA时) 与 `+<build>` (有build时)
    ///
    /// 纯函数,只依赖结构化字段。
    pub fn format(&self, style: FormatStyle, java_style: bool, include_suffix: bool) -> String {
        let limit = if java_style { 4 } else { 6 };
        let fields: Vec<u32> = self
            .number_fields()
            .into_iter()
            .take(limit)
            .map(|field| field.unwrap_or(0))
            .collect();

        let joined = match style {
            FormatStyle::Full => fields
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join("."),
            FormatStyle::Reduced => {
                let last = fields
                    .iter()
                    .rposition(|&value| value != 0)
                    .unwrap_or(0);
                fields[..=last]
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(".")
            }
        };

        let mut output = joined;
        if include_suffix {
            if self.is_early_access() {
                output.push_str("-ea");
            }
            if let Some(build) = self.build {
                output.push('+');
                output.push_str(&build.to_string());
            }
        }
        output
    }
}

impl fmt::Display for VersionNumber {
    /// 不可解析的默认值输出空串,而不是并不存在的 "0" 版本
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}", self.format(FormatStyle::Reduced, true, true))
    }
}
