use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback for any code outside the table, and for a missing code.
pub const UNKNOWN_CONDITION: &str = "天气状况未知";

// WMO weather interpretation codes as documented by Open-Meteo. The texts are
// a fixed contract with existing consumers and must not be reworded.
static WEATHER_CODES: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(0, "晴朗");
    m.insert(1, "少云");
    m.insert(2, "多云");
    m.insert(3, "阴天");
    m.insert(45, "有雾");
    m.insert(48, "雾凇");
    m.insert(51, "毛毛雨");
    m.insert(53, "中等毛毛雨");
    m.insert(55, "大毛毛雨");
    m.insert(56, "冻毛毛雨");
    m.insert(57, "强冻毛毛雨");
    m.insert(61, "小雨");
    m.insert(63, "中雨");
    m.insert(65, "大雨");
    m.insert(66, "冻雨");
    m.insert(67, "强冻雨");
    m.insert(71, "小雪");
    m.insert(73, "中雪");
    m.insert(75, "大雪");
    m.insert(77, "雪粒");
    m.insert(80, "零星小阵雨");
    m.insert(81, "零星中阵雨");
    m.insert(82, "零星大阵雨");
    m.insert(85, "小阵雪");
    m.insert(86, "大阵雪");
    m.insert(95, "雷阵雨");
    m.insert(96, "雷阵雨伴有小冰雹");
    m.insert(99, "雷阵雨伴有大冰雹");
    m
});

/// Human-readable description for a provider weather code. Total over every
/// input: unknown codes and `None` both map to [`UNKNOWN_CONDITION`].
pub fn describe(code: Option<i32>) -> &'static str {
    code.and_then(|c| WEATHER_CODES.get(&c).copied())
        .unwrap_or(UNKNOWN_CONDITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_use_documented_text() {
        assert_eq!(describe(Some(0)), "晴朗");
        assert_eq!(describe(Some(3)), "阴天");
        assert_eq!(describe(Some(55)), "大毛毛雨");
        assert_eq!(describe(Some(77)), "雪粒");
        assert_eq!(describe(Some(99)), "雷阵雨伴有大冰雹");
    }

    #[test]
    fn unrecognized_codes_fall_back() {
        assert_eq!(describe(Some(4)), UNKNOWN_CONDITION);
        assert_eq!(describe(Some(-1)), UNKNOWN_CONDITION);
        assert_eq!(describe(Some(100)), UNKNOWN_CONDITION);
    }

    #[test]
    fn missing_code_falls_back() {
        assert_eq!(describe(None), UNKNOWN_CONDITION);
    }

    #[test]
    fn table_covers_every_documented_code() {
        assert_eq!(WEATHER_CODES.len(), 28);
        for code in [0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67] {
            assert_ne!(describe(Some(code)), UNKNOWN_CONDITION);
        }
        for code in [71, 73, 75, 77, 80, 81, 82, 85, 86, 95, 96, 99] {
            assert_ne!(describe(Some(code)), UNKNOWN_CONDITION);
        }
    }
}
