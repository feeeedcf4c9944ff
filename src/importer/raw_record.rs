// ==========================================
// 项目指标引擎 - 原始记录
// ==========================================
// 职责: 承接上游松散 JSON (字段名沿用上游 camelCase)
// 说明: 所有字段均为 Option<Value>, 缺失与 null 一律为 None,
//       类型与取值校验由 FieldMapper 完成
// ==========================================

use serde::Deserialize;
use serde_json::Value;

/// 原始项目记录
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProjectRecord {
    pub id: Option<Value>,
    pub start_date: Option<Value>,
    pub end_date: Option<Value>,
    pub actual_start_date: Option<Value>,
    pub actual_end_date: Option<Value>,
    pub estimated_budget: Option<Value>,
    pub actual_cost: Option<Value>,
    pub status: Option<Value>,
    pub crew_members: Option<Value>,
}

/// 原始工单记录
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawWorkOrderRecord {
    pub id: Option<Value>,
    pub project_id: Option<Value>,
    pub status: Option<Value>,
    pub priority: Option<Value>,
    pub start_date: Option<Value>,
    pub end_date: Option<Value>,
    pub actual_start_date: Option<Value>,
    pub actual_end_date: Option<Value>,
    pub estimated_budget: Option<Value>,
    pub actual_cost: Option<Value>,
    pub assigned_workers: Option<Value>,
}
