// ==========================================
// 项目指标引擎 - 成本计算器
// ==========================================
// 职责: AC / CV / BAC / EAC / TCPI / 剩余预算
// 红线: AC 包含已取消工单的实际成本 (钱已经花出去了)
//       BAC 不包含已取消工单的预算
// ==========================================

use crate::domain::metrics::CostMetrics;
use crate::domain::project::Project;
use crate::engine::classifier::ClassifiedWorkOrders;
use crate::engine::ratio::safe_ratio;

// 无状态引擎
pub struct CostCalculator;

impl CostCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算 cost 分区
    ///
    /// # 参数
    /// - `actual_cost`: AC (由 [`CostCalculator::actual_cost`] 预先计算)
    /// - `earned_value` / `cpi` / `budget_at_completion`: 来自进度计算器
    pub fn calculate(
        &self,
        actual_cost: f64,
        earned_value: f64,
        cpi: Option<f64>,
        budget_at_completion: f64,
    ) -> CostMetrics {
        let estimate_at_completion = match cpi {
            Some(cpi) if cpi > 0.0 && cpi.is_finite() => budget_at_completion / cpi,
            _ => budget_at_completion,
        };

        CostMetrics {
            actual_cost,
            earned_value,
            cost_variance: earned_value - actual_cost,
            cpi,
            budget_at_completion,
            estimate_at_completion,
            to_complete_performance_index: safe_ratio(
                budget_at_completion - earned_value,
                budget_at_completion - actual_cost,
            ),
            remaining_budget: budget_at_completion - actual_cost,
        }
    }

    /// AC = 项目级实际成本 + Σ 全部工单实际成本 (含已取消, 缺失记 0)
    pub fn actual_cost(&self, project: &Project, classified: &ClassifiedWorkOrders<'_>) -> f64 {
        let work_order_cost = classified
            .all()
            .iter()
            .fold(0.0, |total, wo| total + wo.cost_or_zero());
        project.actual_cost_or_zero() + work_order_cost
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new()
    }
}
