//! 版本号引擎黄金用例
//!
//! 固定版本引擎的观测行为,特别是缺失字段与EA/build决胜路径中
//! 继承自历史实现的不一致处 —— 这些用例的意义在于钉住现状,
//! 行为变化必须先让这里的断言失败。

use std::cmp::Ordering;

use jdk_radar::models::{FormatStyle, ReleaseStatus, VersionNumber};

#[test]
fn test_parse_modern_dotted_version() {
    let version = VersionNumber::parse("17.0.2");
    assert_eq!(version.feature(), Some(17));
    assert_eq!(version.interim(), 0);
    assert_eq!(version.update(), 2);
    assert_eq!(version.patch(), 0);
}

#[test]
fn test_parse_legacy_one_dot_prefix() {
    let version = VersionNumber::parse("1.8.0_352");
    assert_eq!(version.feature(), Some(8));
    assert_eq!(version.update(), 352);
}

#[test]
fn test_parse_legacy_u_syntax() {
    let version = VersionNumber::parse("8u352");
    assert_eq!(version.feature(), Some(8));
    assert_eq!(version.interim(), 0);
    assert_eq!(version.update(), 352);
}

#[test]
fn test_parse_early_access_with_build() {
    let version = VersionNumber::parse("17-ea+5");
    assert_eq!(version.release_status(), Some(ReleaseStatus::EarlyAccess));
    assert_eq!(version.build(), Some(5));
    assert_eq!(version.feature(), Some(17));
}

#[test]
fn test_parse_garbage_yields_default() {
    let version = VersionNumber::parse("garbage text with no version");
    assert!(version.is_empty());
    assert_eq!(version.feature(), None);
    assert_eq!(version.populated_fields(), 0);
}

#[test]
fn test_parse_embedded_in_version_output() {
    let text = "openjdk version \"11.0.18\" 2023-01-17 LTS";
    let version = VersionNumber::parse(text);
    assert_eq!(version.feature(), Some(11));
    assert_eq!(version.update(), 18);
}

#[test]
fn test_match_index_out_of_range_falls_back() {
    let text = "was 11.0.2 now 17.0.1";
    assert_eq!(VersionNumber::parse_with_index(text, 1).feature(), Some(17));
    assert_eq!(VersionNumber::parse_with_index(text, 42).feature(), Some(11));
}

#[test]
fn test_compare_antisymmetry_and_reflexivity() {
    let cases = [
        ("17.0.1", "17.0.2"),
        ("11", "17"),
        ("17-ea+5", "17-ea+6"),
        ("8u352", "8u362"),
        ("17.0.2", "17.0.2+8"),
    ];

    for (left_text, right_text) in cases {
        let left = VersionNumber::parse(left_text);
        let right = VersionNumber::parse(right_text);

        // 反对称: compare(a,b) == -compare(b,a)
        assert_eq!(
            left.compare(&right),
            right.compare(&left).reverse(),
            "反对称失败: {} vs {}",
            left_text,
            right_text
        );

        // 自反: compare(a,a) == Equal
        assert_eq!(left.compare(&left), Ordering::Equal);
        assert_eq!(right.compare(&right), Ordering::Equal);
    }
}

#[test]
fn test_compare_lexicographic_order() {
    let older = VersionNumber::parse("17.0.1");
    let newer = VersionNumber::parse("17.0.2");
    assert_eq!(older.compare(&newer), Ordering::Less);
}

#[test]
fn test_compare_absent_trailing_fields_are_zero() {
    // 缺失的尾部字段按0比较,字段更多不代表更大
    let short = VersionNumber::parse("17");
    let long = VersionNumber::parse("17.0.0.0.0.0");
    assert_eq!(short.compare(&long), Ordering::Equal);

    let nonzero = VersionNumber::parse("17.0.0.0.0.1");
    assert_eq!(short.compare(&nonzero), Ordering::Less);
}

#[test]
fn test_compare_ea_build_tiebreak() {
    let build5 = VersionNumber::parse("17-ea+5");
    let build6 = VersionNumber::parse("17-ea+6");
    assert_eq!(build5.compare(&build6), Ordering::Less);
}

#[test]
fn test_compare_ea_without_build_is_older() {
    let plain_ea = VersionNumber::parse("17-ea");
    let with_build = VersionNumber::parse("17-ea+5");
    assert_eq!(plain_ea.compare(&with_build), Ordering::Less);
    assert_eq!(with_build.compare(&plain_ea), Ordering::Greater);
}

#[test]
fn test_compare_double_ea_build_is_authoritative() {
    // 继承行为: 双EA带build时build比较覆盖元组结果
    let ea17 = VersionNumber::parse("17-ea+5");
    let ea18 = VersionNumber::parse("18-ea+3");
    assert_eq!(ea18.compare(&ea17), Ordering::Less);
}

#[test]
fn test_compare_ga_builds_without_status() {
    // 双方都无发布状态但都带build号: 按build号决胜
    let build8 = VersionNumber::parse("17.0.2+8");
    let build9 = VersionNumber::parse("17.0.2+9");
    assert_eq!(build8.compare(&build9), Ordering::Less);

    // 单方带build且双方均非EA: 视为相等
    let plain = VersionNumber::parse("17.0.2");
    assert_eq!(plain.compare(&build8), Ordering::Equal);
}

#[test]
fn test_equivalence_relation() {
    let plain = VersionNumber::parse("17.0.2");
    let with_build = VersionNumber::parse("17.0.2+8");
    assert!(plain.is_equivalent(&with_build));

    let ea5 = VersionNumber::parse("17-ea+5");
    let ea6 = VersionNumber::parse("17-ea+6");
    assert!(!ea5.is_equivalent(&ea6));

    let other = VersionNumber::parse("17.0.3");
    assert!(!plain.is_equivalent(&other));
}

#[test]
fn test_format_reduced_drops_trailing_zeros() {
    let version = VersionNumber::parse("17.0.0");
    assert_eq!(version.format(FormatStyle::Reduced, true, true), "17");

    let version = VersionNumber::parse("11.0.2");
    assert_eq!(version.format(FormatStyle::Reduced, true, true), "11.0.2");
}

#[test]
fn test_format_full_zero_fills_six_fields() {
    let version = VersionNumber::parse("11.0.2");
    let formatted = version.format(FormatStyle::Full, false, true);
    assert_eq!(formatted, "11.0.2.0.0.0");
    assert_eq!(formatted.split('.').count(), 6);
}

#[test]
fn test_format_suffix() {
    let ea = VersionNumber::parse("21-ea+27");
    assert_eq!(ea.format(FormatStyle::Reduced, true, true), "21-ea+27");
    assert_eq!(ea.format(FormatStyle::Full, true, false), "21.0.0.0");
}

#[test]
fn test_round_trip_full_format() {
    for text in ["11.0.2", "17.0.2.1", "8u352"] {
        let version = VersionNumber::parse(text);
        let formatted = version.format(FormatStyle::Full, false, true);
        let reparsed = VersionNumber::parse(&formatted);
        assert_eq!(
            version.compare(&reparsed),
            Ordering::Equal,
            "round-trip失败: {}",
            text
        );
    }
}

#[test]
fn test_programmatic_construction_guard() {
    let version = VersionNumber::from_parts(17, 0, 2, 0).expect("合法构造");
    assert_eq!(version.feature(), Some(17));
    assert_eq!(version.update(), 2);

    assert!(VersionNumber::from_parts(-1, 0, 0, 0).is_err());
    assert!(VersionNumber::from_parts(0, 0, 0, 0).is_err());
    assert!(VersionNumber::from_parts(17, 0, -3, 0).is_err());
}
