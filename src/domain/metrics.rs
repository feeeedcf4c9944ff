// ==========================================
// 项目指标引擎 - 指标结果领域模型
// ==========================================
// 职责: 定义 MetricsResult 及六个分区的输出结构
// 红线: 字段名与嵌套结构是对外契约 (仪表盘 + 下载报告),
//       改名或调整层级属于破坏性变更
// 约定: 分母为零或日期缺失时输出 null, 不输出 NaN/Infinity/伪 0
// ==========================================

use crate::domain::types::{CostStatus, HealthLabel, ScheduleStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// MetricsResult - 指标计算结果
// ==========================================
// 每次调用重新生成, 引擎不缓存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    pub project_id: String, // 项目ID
    pub as_of: NaiveDate,   // 计算基准日 (注入的 today)

    pub progress: ProgressMetrics,
    pub schedule: ScheduleMetrics,
    pub cost: CostMetrics,
    pub workforce: WorkforceMetrics,
    pub quality: QualityMetrics,
    pub health: HealthMetrics,
}

// ==========================================
// 进度分区 (progress)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMetrics {
    pub earned_value: f64,          // EV
    pub planned_value: Option<f64>, // PV (计划日期缺失时为 null)
    #[serde(rename = "SPI")]
    pub spi: Option<f64>,
    #[serde(rename = "CPI")]
    pub cpi: Option<f64>,
    pub work_order_completion: Option<f64>, // 工单完成率 [0, 1]
    pub schedule_progress: Option<f64>,     // 计划时间消耗比例 [0, 1]
    pub earned_value_progress: Option<f64>, // EV / BAC [0, 1]
    pub overall_progress: Option<f64>,      // 加权综合进度 [0, 1]
    pub details: ProgressDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDetails {
    pub counts: StatusCounts,
    pub budget: BudgetDetails,
    pub schedule: ScheduleDetails,
}

/// 工单状态计数 (含总数)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub on_hold: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    /// 有效工单数 (总数 - 已取消)
    pub fn active_total(&self) -> usize {
        self.total - self.cancelled
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDetails {
    pub total_estimated: f64,       // 有效工单预算合计
    pub earned_value: f64,          // EV
    pub planned_value: Option<f64>, // PV
    pub actual_cost: f64,           // AC
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetails {
    pub planned_days_total: Option<i64>,   // 计划总天数
    pub planned_days_elapsed: Option<i64>, // 计划已过天数 (截断到计划窗口)
}

// ==========================================
// 进度偏差分区 (schedule)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    pub planned_duration: Option<i64>,  // 计划工期 (天)
    pub actual_duration: Option<i64>,   // 实际工期 (天)
    pub schedule_variance: Option<i64>, // 计划 - 实际 (正数 = 超前)
    pub forecast_end_date: Option<NaiveDate>,
    #[serde(rename = "SPI")]
    pub spi: Option<f64>,
}

// ==========================================
// 成本分区 (cost)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostMetrics {
    pub actual_cost: f64,   // AC
    pub earned_value: f64,  // EV
    pub cost_variance: f64, // CV = EV - AC (正数 = 节约)
    #[serde(rename = "CPI")]
    pub cpi: Option<f64>,
    pub budget_at_completion: f64,                   // BAC
    pub estimate_at_completion: f64,                 // EAC
    pub to_complete_performance_index: Option<f64>, // TCPI
    pub remaining_budget: f64,                       // BAC - AC
}

// ==========================================
// 人力分区 (workforce)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceMetrics {
    pub team_size: usize,
    pub active_work_orders_per_worker: f64, // 无在岗人员时为 0
    pub average_work_order_duration_days: Option<f64>,
    pub status_distribution: StatusDistribution,
    pub total_work_orders: usize,
    pub active_work_orders: usize, // 待开始 + 进行中
}

/// 状态分布 (键名沿用状态码)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StatusDistribution {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub on_hold: usize,
    pub cancelled: usize,
}

impl From<StatusCounts> for StatusDistribution {
    fn from(counts: StatusCounts) -> Self {
        Self {
            pending: counts.pending,
            in_progress: counts.in_progress,
            completed: counts.completed,
            on_hold: counts.on_hold,
            cancelled: counts.cancelled,
        }
    }
}

// ==========================================
// 质量与风险分区 (quality)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub overdue_orders: usize,
    pub cost_overruns: usize,
    pub total_completed: usize,
    pub risk_index: f64, // [0, 100]
}

// ==========================================
// 健康度分区 (health)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub health_score: f64, // [0, 100]
    pub label: HealthLabel,
    pub components: HealthComponents,
    pub metrics: HealthIndicators,
    pub schedule_status: Option<ScheduleStatus>,
    pub cost_status: Option<CostStatus>,
}

/// 健康度依据的关键指标回显 (卡片直接展示, 免去跨分区取值)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthIndicators {
    #[serde(rename = "SPI")]
    pub spi: Option<f64>,
    #[serde(rename = "CPI")]
    pub cpi: Option<f64>,
    pub schedule_variance: Option<i64>,
    pub forecast_end_date: Option<NaiveDate>,
}

/// 健康度分项 (均为 0-100 刻度)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthComponents {
    pub schedule_health: f64,
    pub cost_health: f64,
    pub completion_health: f64,
    pub risk_score: f64, // 即 riskIndex, 越高越差
}
