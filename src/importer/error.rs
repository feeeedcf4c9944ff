// ==========================================
// 项目指标引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: record 形如 "work_order#17" / "project#3",
//       主键缺失时以位置标识, 如 "work_order[2]"
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 结构错误 =====
    #[error("JSON 解析失败: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("字段缺失 ({record}): {field}")]
    MissingField { record: String, field: String },

    #[error("字段类型错误 ({record}, 字段 {field}): 期望 {expected}")]
    InvalidType {
        record: String,
        field: String,
        expected: &'static str,
    },

    // ===== 值错误 =====
    #[error("日期格式错误 ({record}, 字段 {field}): 期望 YYYY-MM-DD，实际 {value}")]
    InvalidDate {
        record: String,
        field: String,
        value: String,
    },

    #[error("数值格式错误 ({record}, 字段 {field}): {value}")]
    InvalidNumber {
        record: String,
        field: String,
        value: String,
    },

    #[error("状态码非法 ({record}, 字段 {field}): {value}")]
    InvalidStatus {
        record: String,
        field: String,
        value: String,
    },
}

impl ImportError {
    /// 出错的记录标识
    pub fn record(&self) -> Option<&str> {
        match self {
            ImportError::InvalidJson(_) => None,
            ImportError::MissingField { record, .. }
            | ImportError::InvalidType { record, .. }
            | ImportError::InvalidDate { record, .. }
            | ImportError::InvalidNumber { record, .. }
            | ImportError::InvalidStatus { record, .. } => Some(record),
        }
    }

    /// 出错的字段名
    pub fn field(&self) -> Option<&str> {
        match self {
            ImportError::InvalidJson(_) => None,
            ImportError::MissingField { field, .. }
            | ImportError::InvalidType { field, .. }
            | ImportError::InvalidDate { field, .. }
            | ImportError::InvalidNumber { field, .. }
            | ImportError::InvalidStatus { field, .. } => Some(field),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
