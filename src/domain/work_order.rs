// ==========================================
// 项目指标引擎 - 工单领域模型
// ==========================================
// 职责: 工单计划/实际窗口、预算、成本与指派
// 红线: 工单归属且仅归属一个项目
// ==========================================

use crate::domain::types::WorkOrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// WorkOrder - 工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: String,         // 工单ID
    pub project_id: String, // 所属项目ID

    pub status: WorkOrderStatus, // 工单状态
    pub priority: u8,            // 优先级 (1-5)

    // ===== 计划窗口 =====
    pub start_date: Option<NaiveDate>, // 计划开始
    pub end_date: Option<NaiveDate>,   // 计划结束

    // ===== 实际窗口 =====
    pub actual_start_date: Option<NaiveDate>, // 实际开始
    pub actual_end_date: Option<NaiveDate>,   // 实际结束

    // ===== 成本 =====
    pub estimated_budget: Option<f64>, // 预算
    pub actual_cost: Option<f64>,      // 实际成本

    pub assigned_workers: Vec<String>, // 指派工人ID
}

impl WorkOrder {
    /// 上游未给出优先级时的取值
    pub const DEFAULT_PRIORITY: u8 = 3;

    /// 创建工单 (优先级默认 3, 其余字段缺省)
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        status: WorkOrderStatus,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            status,
            priority: Self::DEFAULT_PRIORITY,
            start_date: None,
            end_date: None,
            actual_start_date: None,
            actual_end_date: None,
            estimated_budget: None,
            actual_cost: None,
            assigned_workers: Vec::new(),
        }
    }

    /// 预算 (缺省为 0)
    pub fn budget_or_zero(&self) -> f64 {
        self.estimated_budget.unwrap_or(0.0)
    }

    /// 实际成本 (缺省为 0)
    pub fn cost_or_zero(&self) -> f64 {
        self.actual_cost.unwrap_or(0.0)
    }
}
