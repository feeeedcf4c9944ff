// ==========================================
// 项目指标引擎 - 字段映射器
// ==========================================
// 职责: 原始 JSON 值 → 领域类型 (ID/日期/金额/状态/布尔/列表)
// 规则: 缺失或 null → None; 存在但类型/格式非法 → 报错 (不猜测, 不强转)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDate;
use serde_json::Value;

/// 字段映射器 (绑定一条记录的标识, 用于错误定位)
pub struct FieldMapper {
    record: String,
}

impl FieldMapper {
    pub fn new(record: impl Into<String>) -> Self {
        Self {
            record: record.into(),
        }
    }

    /// 当前记录标识
    pub fn record(&self) -> &str {
        &self.record
    }

    // ==========================================
    // 主键 / 外键
    // ==========================================

    /// 解析必填 ID (整数或非空字符串)
    pub fn require_id(&self, value: Option<&Value>, field: &str) -> ImportResult<String> {
        self.parse_id(value, field)?
            .ok_or_else(|| self.missing(field))
    }

    /// 解析可选 ID
    pub fn parse_id(&self, value: Option<&Value>, field: &str) -> ImportResult<Option<String>> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_string()))
                }
            }
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    Ok(Some(i.to_string()))
                } else if let Some(u) = n.as_u64() {
                    Ok(Some(u.to_string()))
                } else {
                    Err(self.invalid_type(field, "integer or string"))
                }
            }
            Some(_) => Err(self.invalid_type(field, "integer or string")),
        }
    }

    // ==========================================
    // 日期
    // ==========================================

    /// 解析日期 (YYYY-MM-DD; 接受 ISO 日期时间前缀, 如 2024-01-01T08:00:00)
    pub fn parse_date(&self, value: Option<&Value>, field: &str) -> ImportResult<Option<NaiveDate>> {
        let raw = match value {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(s)) => s.trim(),
            Some(other) => {
                return Err(ImportError::InvalidDate {
                    record: self.record.clone(),
                    field: field.to_string(),
                    value: other.to_string(),
                })
            }
        };

        if raw.is_empty() {
            return Ok(None);
        }

        // 日期时间 → 截取日期部分
        let date_part = match raw.char_indices().nth(10) {
            Some((idx, 'T')) | Some((idx, ' ')) => &raw[..idx],
            _ => raw,
        };

        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ImportError::InvalidDate {
                record: self.record.clone(),
                field: field.to_string(),
                value: raw.to_string(),
            })
    }

    // ==========================================
    // 数值
    // ==========================================

    /// 解析金额 (数字或数字字符串, 必须为有限数)
    pub fn parse_amount(&self, value: Option<&Value>, field: &str) -> ImportResult<Option<f64>> {
        let parsed = match value {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<f64>().ok()
            }
            Some(_) => return Err(self.invalid_type(field, "number")),
        };

        match parsed {
            Some(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(self.invalid_number(field, value)),
        }
    }

    /// 解析可选小整数 (如优先级)
    pub fn parse_u8(&self, value: Option<&Value>, field: &str) -> ImportResult<Option<u8>> {
        let parsed = match value {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            Some(_) => return Err(self.invalid_type(field, "integer")),
        };

        parsed
            .and_then(|v| u8::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| self.invalid_number(field, value))
    }

    // ==========================================
    // 状态 / 布尔 / 列表
    // ==========================================

    /// 解析状态码 (由调用方提供解析函数)
    pub fn parse_code<T>(
        &self,
        value: Option<&Value>,
        field: &str,
        from_code: impl Fn(&str) -> Option<T>,
    ) -> ImportResult<Option<T>> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => {
                from_code(s.as_str())
                    .map(Some)
                    .ok_or_else(|| ImportError::InvalidStatus {
                        record: self.record.clone(),
                        field: field.to_string(),
                        value: s.clone(),
                    })
            }
            Some(_) => Err(self.invalid_type(field, "string")),
        }
    }

    /// 解析布尔值 (缺失时使用默认值)
    pub fn parse_bool(&self, value: Option<&Value>, field: &str, default: bool) -> ImportResult<bool> {
        match value {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.invalid_type(field, "boolean")),
        }
    }

    /// 解析数组 (缺失或 null 视为空数组)
    pub fn parse_array<'v>(&self, value: Option<&'v Value>, field: &str) -> ImportResult<&'v [Value]> {
        match value {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.invalid_type(field, "array")),
        }
    }

    // ==========================================
    // 错误构造
    // ==========================================

    pub fn missing(&self, field: &str) -> ImportError {
        ImportError::MissingField {
            record: self.record.clone(),
            field: field.to_string(),
        }
    }

    fn invalid_type(&self, field: &str, expected: &'static str) -> ImportError {
        ImportError::InvalidType {
            record: self.record.clone(),
            field: field.to_string(),
            expected,
        }
    }

    fn invalid_number(&self, field: &str, value: Option<&Value>) -> ImportError {
        ImportError::InvalidNumber {
            record: self.record.clone(),
            field: field.to_string(),
            value: value.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapper() -> FieldMapper {
        FieldMapper::new("work_order#7")
    }

    #[test]
    fn test_parse_id_accepts_number_and_string() {
        let m = mapper();
        assert_eq!(m.require_id(Some(&json!(17)), "id").unwrap(), "17");
        assert_eq!(m.require_id(Some(&json!(" WO-1 ")), "id").unwrap(), "WO-1");
        assert!(matches!(
            m.require_id(Some(&json!("")), "id"),
            Err(ImportError::MissingField { .. })
        ));
        assert!(matches!(
            m.require_id(Some(&json!(1.5)), "id"),
            Err(ImportError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_parse_date() {
        let m = mapper();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(m.parse_date(Some(&json!("2024-03-15")), "endDate").unwrap(), expected);
        assert_eq!(
            m.parse_date(Some(&json!("2024-03-15T08:30:00")), "endDate").unwrap(),
            expected
        );
        assert_eq!(m.parse_date(Some(&Value::Null), "endDate").unwrap(), None);
        assert_eq!(m.parse_date(None, "endDate").unwrap(), None);
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        let m = mapper();
        let err = m.parse_date(Some(&json!("15/03/2024")), "endDate").unwrap_err();
        assert_eq!(err.record(), Some("work_order#7"));
        assert_eq!(err.field(), Some("endDate"));

        assert!(matches!(
            m.parse_date(Some(&json!(20240315)), "endDate"),
            Err(ImportError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_amount() {
        let m = mapper();
        assert_eq!(m.parse_amount(Some(&json!(1200.5)), "actualCost").unwrap(), Some(1200.5));
        assert_eq!(m.parse_amount(Some(&json!("800")), "actualCost").unwrap(), Some(800.0));
        assert_eq!(m.parse_amount(Some(&json!("")), "actualCost").unwrap(), None);
        assert!(matches!(
            m.parse_amount(Some(&json!("NaN")), "actualCost"),
            Err(ImportError::InvalidNumber { .. })
        ));
        assert!(matches!(
            m.parse_amount(Some(&json!(true)), "actualCost"),
            Err(ImportError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_parse_u8() {
        let m = mapper();
        assert_eq!(m.parse_u8(Some(&json!(4)), "priority").unwrap(), Some(4));
        assert_eq!(m.parse_u8(Some(&json!("2")), "priority").unwrap(), Some(2));
        assert_eq!(m.parse_u8(None, "priority").unwrap(), None);
        assert!(matches!(
            m.parse_u8(Some(&json!(-1)), "priority"),
            Err(ImportError::InvalidNumber { .. })
        ));
    }
}
