// ==========================================
// 项目指标引擎 - 人力计算器
// ==========================================
// 职责: 团队规模 / 人均在手工单 / 平均完工工期 / 状态分布
// 策略: 无在岗人员时人均在手工单记 0 (无可度量的人均负荷)
// ==========================================

use crate::domain::metrics::WorkforceMetrics;
use crate::domain::project::Project;
use crate::domain::types::WorkOrderStatus;
use crate::engine::classifier::ClassifiedWorkOrders;
use crate::engine::ratio::safe_ratio;

// 无状态引擎
pub struct WorkforceCalculator;

impl WorkforceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算 workforce 分区
    pub fn calculate(
        &self,
        project: &Project,
        classified: &ClassifiedWorkOrders<'_>,
    ) -> WorkforceMetrics {
        let counts = classified.counts();
        let team_size = project.active_crew_count();
        let active_work_orders = counts.pending + counts.in_progress;

        let active_work_orders_per_worker =
            safe_ratio(active_work_orders as f64, team_size as f64).unwrap_or(0.0);

        WorkforceMetrics {
            team_size,
            active_work_orders_per_worker,
            average_work_order_duration_days: self.average_completed_duration(classified),
            status_distribution: counts.into(),
            total_work_orders: counts.total,
            active_work_orders,
        }
    }

    /// 已完成且工期已知的工单的平均工期 (天)
    pub fn average_completed_duration(&self, classified: &ClassifiedWorkOrders<'_>) -> Option<f64> {
        let durations: Vec<i64> = classified
            .facts()
            .iter()
            .filter(|f| f.status == WorkOrderStatus::Completed)
            .filter_map(|f| f.effective_duration_days)
            .collect();

        let total: i64 = durations.iter().sum();
        safe_ratio(total as f64, durations.len() as f64)
    }
}

impl Default for WorkforceCalculator {
    fn default() -> Self {
        Self::new()
    }
}
