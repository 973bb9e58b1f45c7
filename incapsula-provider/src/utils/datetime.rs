//! 日期时间工具
//!
//! Incapsula 以 Unix 时间戳返回日期，多数为毫秒，少数旧接口为秒。

use chrono::{DateTime, Utc};

/// 解析 Unix 时间戳（自动判断秒/毫秒）
///
/// 非正数视为缺失。
pub fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    if ts <= 0 {
        return None;
    }
    // 如果时间戳 > 10^11，认为是毫秒
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_detected() {
        let dt = parse_unix_timestamp(1_372_573_200_000);
        assert_eq!(dt.map(|d| d.timestamp()), Some(1_372_573_200));
    }

    #[test]
    fn seconds_detected() {
        let dt = parse_unix_timestamp(1_372_573_200);
        assert_eq!(dt.map(|d| d.timestamp()), Some(1_372_573_200));
    }

    #[test]
    fn zero_is_missing() {
        assert!(parse_unix_timestamp(0).is_none());
        assert!(parse_unix_timestamp(-5).is_none());
    }
}
