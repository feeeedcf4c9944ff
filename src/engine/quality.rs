// ==========================================
// 项目指标引擎 - 质量与风险计算器
// ==========================================
// 职责: 逾期工单数 / 超支工单数 / 已完成数 / 风险指数
// 输入: 分类结果 (逐单事实) + 风险权重
// 输出: QualityMetrics (quality 分区)
// 红线: 已取消工单不计入逾期与超支; 风险指数始终在 [0, 100]
// ==========================================

use crate::config::RiskWeights;
use crate::domain::metrics::QualityMetrics;
use crate::engine::classifier::ClassifiedWorkOrders;
use crate::engine::ratio::{clamp_percent, safe_ratio};

// ==========================================
// QualityRiskCalculator - 质量与风险计算器
// ==========================================
pub struct QualityRiskCalculator<'c> {
    weights: &'c RiskWeights,
}

impl<'c> QualityRiskCalculator<'c> {
    pub fn new(weights: &'c RiskWeights) -> Self {
        Self { weights }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算 quality 分区
    pub fn calculate(&self, classified: &ClassifiedWorkOrders<'_>) -> QualityMetrics {
        // 1. 计数 (仅有效工单)
        let active_facts = classified.facts().iter().filter(|f| f.status.is_active());
        let (overdue_orders, cost_overruns) =
            active_facts.fold((0usize, 0usize), |(overdue, overrun), f| {
                (
                    overdue + usize::from(f.is_overdue),
                    overrun + usize::from(f.is_cost_overrun),
                )
            });

        // 2. 风险指数
        let risk_index = self.risk_index(overdue_orders, cost_overruns, classified.active_total());

        QualityMetrics {
            overdue_orders,
            cost_overruns,
            total_completed: classified.counts().completed,
            risk_index,
        }
    }

    /// 风险指数 = 逾期占比 × w_overdue + 超支占比 × w_overrun, 截断到 [0, 100]
    ///
    /// 无有效工单时两项占比都记 0
    pub fn risk_index(&self, overdue: usize, overruns: usize, active_total: usize) -> f64 {
        let active = active_total as f64;
        let overdue_ratio = safe_ratio(overdue as f64, active).unwrap_or(0.0);
        let overrun_ratio = safe_ratio(overruns as f64, active).unwrap_or(0.0);

        clamp_percent(
            overdue_ratio * self.weights.overdue + overrun_ratio * self.weights.cost_overrun,
        )
    }
}
