// ==========================================
// 项目指标引擎 - 领域模型层
// ==========================================
// 职责: 定义项目/工单快照与指标结果结构
// 红线: 不含计算逻辑, 不含 I/O
// ==========================================

pub mod metrics;
pub mod project;
pub mod types;
pub mod work_order;

// 重导出核心类型
pub use metrics::{
    BudgetDetails, CostMetrics, HealthComponents, HealthIndicators, HealthMetrics, MetricsResult,
    ProgressDetails, ProgressMetrics, QualityMetrics, ScheduleDetails, ScheduleMetrics, StatusCounts,
    StatusDistribution, WorkforceMetrics,
};
pub use project::{CrewMember, Project};
pub use types::{CostStatus, HealthLabel, ProjectStatus, ScheduleStatus, WorkOrderStatus};
pub use work_order::WorkOrder;
