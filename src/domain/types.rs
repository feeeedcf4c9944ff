// ==========================================
// 项目指标引擎 - 领域类型定义
// ==========================================
// 职责: 工单/项目状态、健康度标签、进度与成本徽标
// 序列化格式: snake_case (与上游 API 一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工单状态 (Work Order Status)
// ==========================================
// 红线: 每个工单必属于且仅属于五种状态之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,    // 待开始
    InProgress, // 进行中
    OnHold,     // 挂起
    Completed,  // 已完成
    Cancelled,  // 已取消
}

impl WorkOrderStatus {
    /// 全部状态 (固定顺序, 用于分区初始化)
    pub const ALL: [WorkOrderStatus; 5] = [
        WorkOrderStatus::Pending,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::OnHold,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Cancelled,
    ];

    /// 从字符串解析状态 (大小写不敏感)
    ///
    /// # 返回
    /// - Some(status): 合法状态码
    /// - None: 未知状态码 (由调用方决定如何报错)
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(WorkOrderStatus::Pending),
            "in_progress" => Some(WorkOrderStatus::InProgress),
            "on_hold" => Some(WorkOrderStatus::OnHold),
            "completed" => Some(WorkOrderStatus::Completed),
            "cancelled" => Some(WorkOrderStatus::Cancelled),
            _ => None,
        }
    }

    /// 是否为有效工单 (非取消)
    pub fn is_active(&self) -> bool {
        *self != WorkOrderStatus::Cancelled
    }

    /// 是否计入挣值 (已完成 + 进行中)
    pub fn is_ev_eligible(&self) -> bool {
        matches!(self, WorkOrderStatus::Completed | WorkOrderStatus::InProgress)
    }

    /// 是否已终结 (已完成或已取消, 不再参与逾期判定)
    pub fn is_closed(&self) -> bool {
        matches!(self, WorkOrderStatus::Completed | WorkOrderStatus::Cancelled)
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkOrderStatus::Pending => write!(f, "pending"),
            WorkOrderStatus::InProgress => write!(f, "in_progress"),
            WorkOrderStatus::OnHold => write!(f, "on_hold"),
            WorkOrderStatus::Completed => write!(f, "completed"),
            WorkOrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==========================================
// 项目状态 (Project Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,   // 规划中
    InProgress, // 执行中
    OnHold,     // 挂起
    Completed,  // 已完成
    Cancelled,  // 已取消
}

impl ProjectStatus {
    /// 从字符串解析状态 (大小写不敏感)
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "planning" => Some(ProjectStatus::Planning),
            "in_progress" => Some(ProjectStatus::InProgress),
            "on_hold" => Some(ProjectStatus::OnHold),
            "completed" => Some(ProjectStatus::Completed),
            "cancelled" => Some(ProjectStatus::Cancelled),
            _ => None,
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Planning
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Planning => write!(f, "planning"),
            ProjectStatus::InProgress => write!(f, "in_progress"),
            ProjectStatus::OnHold => write!(f, "on_hold"),
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==========================================
// 健康度标签 (Health Label)
// ==========================================
// 顺序: Poor < Fair < Good < Excellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthLabel {
    Poor,      // 差
    Fair,      // 一般
    Good,      // 良好
    Excellent, // 优秀
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthLabel::Poor => write!(f, "Poor"),
            HealthLabel::Fair => write!(f, "Fair"),
            HealthLabel::Good => write!(f, "Good"),
            HealthLabel::Excellent => write!(f, "Excellent"),
        }
    }
}

// ==========================================
// 进度徽标 (Schedule Status)
// ==========================================
// 由 SPI 相对 1.0 的容差带判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Ahead,   // 超前
    OnTrack, // 正常
    Behind,  // 滞后
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleStatus::Ahead => write!(f, "ahead"),
            ScheduleStatus::OnTrack => write!(f, "on_track"),
            ScheduleStatus::Behind => write!(f, "behind"),
        }
    }
}

// ==========================================
// 成本徽标 (Cost Status)
// ==========================================
// 由 CPI 相对 1.0 的容差带判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostStatus {
    Under,    // 低于预算
    OnBudget, // 符合预算
    Over,     // 超出预算
}

impl fmt::Display for CostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostStatus::Under => write!(f, "under"),
            CostStatus::OnBudget => write!(f, "on_budget"),
            CostStatus::Over => write!(f, "over"),
        }
    }
}
