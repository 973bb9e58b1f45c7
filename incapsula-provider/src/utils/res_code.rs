//! `res` 字段反序列化
//!
//! 接口返回的 `res` 有时是数字，有时是数字字符串（如 `"9403"`）。

use serde::{Deserialize, Deserializer};

/// 反序列化：支持整数或数字字符串，`null`/空串视为缺失
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ResCode {
        I64(i64),
        String(String),
    }

    match Option::<ResCode>::deserialize(deserializer)? {
        Some(ResCode::I64(code)) => Ok(Some(code)),
        Some(ResCode::String(s)) if s.trim().is_empty() => Ok(None),
        Some(ResCode::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| Error::custom(format!("Invalid res code '{s}': {e}"))),
        None => Ok(None),
    }
}
