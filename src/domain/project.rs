// ==========================================
// 项目指标引擎 - 项目领域模型
// ==========================================
// 职责: 项目计划窗口、实际窗口、成本与班组成员
// 红线: 引擎只读, 不修改项目记录
// ==========================================

use crate::domain::types::ProjectStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// CrewMember - 班组成员
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    pub worker_id: String, // 工人ID
    pub is_active: bool,   // 是否在岗
}

impl CrewMember {
    pub fn new(worker_id: impl Into<String>, is_active: bool) -> Self {
        Self {
            worker_id: worker_id.into(),
            is_active,
        }
    }
}

// ==========================================
// Project - 项目
// ==========================================
// 说明: 计划窗口允许缺失或倒置, 引擎需容错
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String, // 项目ID

    // ===== 计划窗口 =====
    pub start_date: Option<NaiveDate>, // 计划开始
    pub end_date: Option<NaiveDate>,   // 计划结束

    // ===== 实际窗口 =====
    pub actual_start_date: Option<NaiveDate>, // 实际开始
    pub actual_end_date: Option<NaiveDate>,   // 实际结束

    // ===== 成本 =====
    pub estimated_budget: Option<f64>, // 项目预算
    pub actual_cost: Option<f64>,      // 项目级实际成本 (缺省视为 0)

    pub status: ProjectStatus,         // 项目状态
    pub crew_members: Vec<CrewMember>, // 班组成员
}

impl Project {
    /// 创建仅含ID的项目 (其余字段缺省)
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start_date: None,
            end_date: None,
            actual_start_date: None,
            actual_end_date: None,
            estimated_budget: None,
            actual_cost: None,
            status: ProjectStatus::default(),
            crew_members: Vec::new(),
        }
    }

    /// 计划工期 (天)
    ///
    /// # 返回
    /// - Some(days): 计划开始与结束都存在 (可能为负, 表示窗口倒置)
    /// - None: 任一日期缺失
    pub fn planned_duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// 项目级实际成本 (缺省为 0)
    pub fn actual_cost_or_zero(&self) -> f64 {
        self.actual_cost.unwrap_or(0.0)
    }

    /// 在岗班组成员数量
    pub fn active_crew_count(&self) -> usize {
        self.crew_members.iter().filter(|m| m.is_active).count()
    }
}
