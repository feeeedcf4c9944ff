// ==========================================
// 项目指标引擎 - 健康度聚合器
// ==========================================
// 职责: SPI / CPI / 完成率 / 风险指数 → 0-100 健康度 + 标签 + 徽标
// 公式: score = 100 × Σ(wᵢ × cᵢ) / Σwᵢ, 截断到 [0, 100]
//   c_schedule   = norm(SPI)
//   c_cost       = norm(CPI)
//   c_completion = clamp(workOrderCompletion, 0, 1)
//   c_risk       = (100 - riskIndex) / 100
//   norm(x)      = clamp((x - floor) / (1 - floor), 0, 1), x 为 null 时记 1.0
// components.riskScore 直接输出 riskIndex (越高越差), 其余分项越高越好
// 无有效工单: 直接取中性分 (neutral_health_score)
// ==========================================

use crate::config::MetricsConfig;
use crate::domain::metrics::{HealthComponents, HealthIndicators, HealthMetrics};
use crate::domain::types::{CostStatus, ScheduleStatus};
use crate::engine::ratio::{clamp_percent, clamp_unit, safe_ratio};
use chrono::NaiveDate;
use tracing::debug;

// ==========================================
// HealthInputs - 聚合输入
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthInputs {
    pub spi: Option<f64>,
    pub cpi: Option<f64>,
    pub work_order_completion: Option<f64>,
    pub risk_index: f64,
    pub active_work_orders: usize,
    pub schedule_variance: Option<i64>,
    pub forecast_end_date: Option<NaiveDate>,
}

// ==========================================
// HealthScoreAggregator - 健康度聚合器
// ==========================================
pub struct HealthScoreAggregator<'c> {
    config: &'c MetricsConfig,
}

impl<'c> HealthScoreAggregator<'c> {
    pub fn new(config: &'c MetricsConfig) -> Self {
        Self { config }
    }

    /// 计算 health 分区
    pub fn aggregate(&self, inputs: &HealthInputs) -> HealthMetrics {
        // 1. 分项 [0, 1]
        let schedule = self.normalize_index(inputs.spi);
        let cost = self.normalize_index(inputs.cpi);
        let completion = clamp_unit(inputs.work_order_completion.unwrap_or(1.0));
        let risk = clamp_unit((100.0 - inputs.risk_index) / 100.0);

        // 2. 加权合成
        let w = &self.config.health_weights;
        let weighted = w.schedule * schedule + w.cost * cost + w.completion * completion + w.risk * risk;

        let health_score = if inputs.active_work_orders == 0 {
            debug!("无有效工单, 健康度取中性分");
            clamp_percent(self.config.neutral_health_score)
        } else {
            safe_ratio(weighted, w.total())
                .map(|blend| clamp_percent(blend * 100.0))
                .unwrap_or_else(|| clamp_percent(self.config.neutral_health_score))
        };

        HealthMetrics {
            health_score,
            label: self.config.health_thresholds.label_for(health_score),
            components: HealthComponents {
                schedule_health: schedule * 100.0,
                cost_health: cost * 100.0,
                completion_health: completion * 100.0,
                risk_score: clamp_percent(inputs.risk_index),
            },
            metrics: HealthIndicators {
                spi: inputs.spi,
                cpi: inputs.cpi,
                schedule_variance: inputs.schedule_variance,
                forecast_end_date: inputs.forecast_end_date,
            },
            schedule_status: inputs.spi.map(|spi| self.schedule_status(spi)),
            cost_status: inputs.cpi.map(|cpi| self.cost_status(cpi)),
        }
    }

    /// 绩效指数归一化 (null 视为 1.0)
    pub fn normalize_index(&self, index: Option<f64>) -> f64 {
        let x = index.unwrap_or(1.0);
        let floor = self.config.index_floor;
        safe_ratio(x - floor, 1.0 - floor).map(clamp_unit).unwrap_or(1.0)
    }

    // ==========================================
    // 徽标
    // ==========================================

    pub fn schedule_status(&self, spi: f64) -> ScheduleStatus {
        let tol = self.config.status_tolerance;
        if spi > 1.0 + tol {
            ScheduleStatus::Ahead
        } else if spi < 1.0 - tol {
            ScheduleStatus::Behind
        } else {
            ScheduleStatus::OnTrack
        }
    }

    pub fn cost_status(&self, cpi: f64) -> CostStatus {
        let tol = self.config.status_tolerance;
        if cpi > 1.0 + tol {
            CostStatus::Under
        } else if cpi < 1.0 - tol {
            CostStatus::Over
        } else {
            CostStatus::OnBudget
        }
    }
}
