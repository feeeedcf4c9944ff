// ==========================================
// 项目指标引擎 - 引擎层
// ==========================================
// 依赖顺序 (叶子优先):
//   classifier → progress → schedule / cost
//   classifier → workforce / quality
//   全部 → health → orchestrator (MetricsFacade)
// ==========================================
// 职责: 纯计算, 不做 I/O
// 红线: 分母为零输出 None, 不输出 NaN/Infinity
// ==========================================

pub mod classifier;
pub mod cost;
pub mod error;
pub mod health;
pub mod orchestrator;
pub mod progress;
pub mod quality;
pub mod ratio;
pub mod schedule;
pub mod workforce;

// 重导出核心引擎
pub use classifier::{ClassifiedWorkOrders, WorkOrderClassifier, WorkOrderFacts};
pub use cost::CostCalculator;
pub use error::MetricsError;
pub use health::{HealthInputs, HealthScoreAggregator};
pub use orchestrator::{compute_metrics, MetricsFacade};
pub use progress::{PlannedWindow, ProgressCalculator};
pub use quality::QualityRiskCalculator;
pub use schedule::ScheduleCalculator;
pub use workforce::WorkforceCalculator;
