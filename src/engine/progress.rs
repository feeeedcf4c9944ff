// ==========================================
// 项目指标引擎 - 进度计算器
// ==========================================
// 职责: EV / PV / SPI / CPI / 工单完成率 / 综合进度
// 输入: 分类结果 + 项目计划窗口 + AC + today
// 输出: ProgressMetrics (progress 分区)
// 红线: 已取消工单不计入 EV 与预算合计
// ==========================================

use crate::config::MetricsConfig;
use crate::domain::metrics::{BudgetDetails, ProgressDetails, ProgressMetrics, ScheduleDetails};
use crate::domain::project::Project;
use crate::domain::types::WorkOrderStatus;
use crate::engine::classifier::ClassifiedWorkOrders;
use crate::engine::ratio::{clamp_unit, safe_ratio};
use chrono::NaiveDate;
use tracing::warn;

// ==========================================
// PlannedWindow - 计划时间消耗
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedWindow {
    pub days_total: i64,   // 计划总天数 (窗口倒置时可为负)
    pub days_elapsed: i64, // 已过天数 (截断到计划窗口)
    pub fraction: f64,     // 时间消耗比例 [0, 1]
}

// ==========================================
// ProgressCalculator - 进度计算器
// ==========================================
pub struct ProgressCalculator<'c> {
    config: &'c MetricsConfig,
}

impl<'c> ProgressCalculator<'c> {
    pub fn new(config: &'c MetricsConfig) -> Self {
        Self { config }
    }

    /// 计算 progress 分区
    ///
    /// # 参数
    /// - `project`: 项目 (计划窗口)
    /// - `classified`: 工单分类结果
    /// - `actual_cost`: AC (由成本计算器给出, 用于 CPI)
    /// - `today`: 计算基准日
    pub fn calculate(
        &self,
        project: &Project,
        classified: &ClassifiedWorkOrders<'_>,
        actual_cost: f64,
        today: NaiveDate,
    ) -> ProgressMetrics {
        // 1. 挣值与预算
        let earned_value = self.earned_value(classified);
        let total_estimated = self.total_estimated_budget(classified);

        // 2. 计划值
        let window = self.planned_window(project, today);
        let planned_value = window.map(|w| w.fraction * total_estimated);

        // 3. 绩效指数
        // 无有效工单时 EV 恒为 0, CPI 没有意义
        let spi = planned_value.and_then(|pv| safe_ratio(earned_value, pv));
        let cpi = if classified.active_total() == 0 {
            None
        } else {
            safe_ratio(earned_value, actual_cost)
        };

        // 4. 进度比例
        let work_order_completion = self.work_order_completion(classified);
        let schedule_progress = window.map(|w| w.fraction);
        let earned_value_progress = safe_ratio(earned_value, total_estimated).map(clamp_unit);
        let overall_progress =
            self.overall_progress(work_order_completion, schedule_progress, earned_value_progress);

        ProgressMetrics {
            earned_value,
            planned_value,
            spi,
            cpi,
            work_order_completion,
            schedule_progress,
            earned_value_progress,
            overall_progress,
            details: ProgressDetails {
                counts: classified.counts(),
                budget: BudgetDetails {
                    total_estimated,
                    earned_value,
                    planned_value,
                    actual_cost,
                },
                schedule: ScheduleDetails {
                    planned_days_total: window.map(|w| w.days_total),
                    planned_days_elapsed: window.map(|w| w.days_elapsed),
                },
            },
        }
    }

    // ==========================================
    // 挣值 / 预算
    // ==========================================

    /// EV = Σ 已完成预算 + credit × Σ 进行中预算 (预算缺失记 0)
    ///
    /// 累加从 +0.0 起步: 空集合不得产生 -0.0
    pub fn earned_value(&self, classified: &ClassifiedWorkOrders<'_>) -> f64 {
        classified
            .active()
            .filter(|wo| wo.status.is_ev_eligible())
            .fold(0.0, |ev, wo| ev + self.credit_for(wo.status) * wo.budget_or_zero())
    }

    /// 有效工单预算合计 (即 BAC)
    pub fn total_estimated_budget(&self, classified: &ClassifiedWorkOrders<'_>) -> f64 {
        classified
            .active()
            .fold(0.0, |total, wo| total + wo.budget_or_zero())
    }

    // 挣值计入比例
    fn credit_for(&self, status: WorkOrderStatus) -> f64 {
        match status {
            WorkOrderStatus::Completed => 1.0,
            WorkOrderStatus::InProgress => self.config.in_progress_credit,
            _ => 0.0,
        }
    }

    // ==========================================
    // 计划时间
    // ==========================================

    /// 计划时间消耗
    ///
    /// # 规则
    /// - 计划开始或结束缺失: None
    /// - 正常窗口: clamp((today - start) / (end - start), 0, 1)
    /// - 窗口为空或倒置: today >= start 记 1, 否则记 0
    pub fn planned_window(&self, project: &Project, today: NaiveDate) -> Option<PlannedWindow> {
        let (start, end) = (project.start_date?, project.end_date?);
        let days_total = (end - start).num_days();

        if days_total <= 0 {
            warn!(
                project_id = %project.id,
                start_date = %start,
                end_date = %end,
                "计划结束不晚于计划开始, 按退化窗口处理"
            );
            let fraction = if today >= start { 1.0 } else { 0.0 };
            return Some(PlannedWindow {
                days_total,
                days_elapsed: 0,
                fraction,
            });
        }

        let capped_today = today.clamp(start, end);
        let days_elapsed = (capped_today - start).num_days();

        Some(PlannedWindow {
            days_total,
            days_elapsed,
            fraction: clamp_unit(days_elapsed as f64 / days_total as f64),
        })
    }

    // ==========================================
    // 完成度
    // ==========================================

    /// 工单完成率 = (已完成 + credit × 进行中) / 有效工单数
    pub fn work_order_completion(&self, classified: &ClassifiedWorkOrders<'_>) -> Option<f64> {
        let counts = classified.counts();
        let equivalent =
            counts.completed as f64 + self.config.in_progress_credit * counts.in_progress as f64;
        safe_ratio(equivalent, counts.active_total() as f64).map(clamp_unit)
    }

    /// 综合进度 (归一化权重; 缺失分项记 0, 全部缺失为 None)
    pub fn overall_progress(
        &self,
        work_order_completion: Option<f64>,
        schedule_progress: Option<f64>,
        earned_value_progress: Option<f64>,
    ) -> Option<f64> {
        if work_order_completion.is_none()
            && schedule_progress.is_none()
            && earned_value_progress.is_none()
        {
            return None;
        }

        let w = self.config.progress_weights.normalized();
        let blended = w.work_orders * work_order_completion.unwrap_or(0.0)
            + w.schedule * schedule_progress.unwrap_or(0.0)
            + w.earned_value * earned_value_progress.unwrap_or(0.0);

        Some(clamp_unit(blended))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::work_order::WorkOrder;
    use crate::engine::classifier::WorkOrderClassifier;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project_2024() -> Project {
        let mut p = Project::new("P1");
        p.start_date = Some(date(2024, 1, 1));
        p.end_date = Some(date(2024, 12, 31));
        p
    }

    #[test]
    fn test_planned_window_midpoint() {
        let config = MetricsConfig::default();
        let calc = ProgressCalculator::new(&config);
        let window = calc.planned_window(&project_2024(), date(2024, 7, 1)).unwrap();

        assert_eq!(window.days_total, 365);
        assert_eq!(window.days_elapsed, 182);
        assert!((window.fraction - 182.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_planned_window_is_clamped() {
        let config = MetricsConfig::default();
        let calc = ProgressCalculator::new(&config);
        let project = project_2024();

        assert_eq!(calc.planned_window(&project, date(2023, 6, 1)).unwrap().fraction, 0.0);
        let after = calc.planned_window(&project, date(2025, 6, 1)).unwrap();
        assert_eq!(after.fraction, 1.0);
        assert_eq!(after.days_elapsed, 365);
    }

    #[test]
    fn test_planned_window_degenerate_and_missing() {
        let config = MetricsConfig::default();
        let calc = ProgressCalculator::new(&config);

        let mut inverted = project_2024();
        inverted.end_date = Some(date(2023, 12, 1));
        assert_eq!(calc.planned_window(&inverted, date(2024, 2, 1)).unwrap().fraction, 1.0);
        assert_eq!(calc.planned_window(&inverted, date(2023, 12, 15)).unwrap().fraction, 0.0);

        let mut missing = project_2024();
        missing.end_date = None;
        assert!(calc.planned_window(&missing, date(2024, 2, 1)).is_none());
    }

    #[test]
    fn test_overall_progress_blend() {
        let config = MetricsConfig::default();
        let calc = ProgressCalculator::new(&config);

        assert_eq!(calc.overall_progress(None, None, None), None);

        let overall = calc.overall_progress(Some(1.0), Some(0.5), Some(0.0)).unwrap();
        assert!((overall - (0.5 + 0.2 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_in_progress_credit_is_configurable() {
        let mut config = MetricsConfig::default();
        config.in_progress_credit = 0.25;
        let calc = ProgressCalculator::new(&config);

        let mut wo = WorkOrder::new("WO1", "P1", WorkOrderStatus::InProgress);
        wo.estimated_budget = Some(1000.0);
        let orders = vec![wo];
        let classified = WorkOrderClassifier::new().classify(&orders, date(2024, 6, 1));

        assert!((calc.earned_value(&classified) - 250.0).abs() < 1e-9);
        assert!((calc.work_order_completion(&classified).unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sums_are_positive_zero() {
        let config = MetricsConfig::default();
        let calc = ProgressCalculator::new(&config);

        let mut cancelled = WorkOrder::new("WO1", "P1", WorkOrderStatus::Cancelled);
        cancelled.estimated_budget = Some(5000.0);
        let orders = vec![cancelled];
        let classified = WorkOrderClassifier::new().classify(&orders, date(2024, 6, 1));

        let ev = calc.earned_value(&classified);
        let bac = calc.total_estimated_budget(&classified);
        assert!(ev == 0.0 && ev.is_sign_positive());
        assert!(bac == 0.0 && bac.is_sign_positive());

        let progress = calc.calculate(&project_2024(), &classified, 800.0, date(2024, 7, 1));
        assert_eq!(progress.cpi, None);
    }

    #[test]
    fn test_pending_and_on_hold_earn_nothing() {
        let config = MetricsConfig::default();
        let calc = ProgressCalculator::new(&config);

        let orders: Vec<WorkOrder> = [
            WorkOrderStatus::Pending,
            WorkOrderStatus::OnHold,
            WorkOrderStatus::Completed,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, status)| {
            let mut wo = WorkOrder::new(&format!("WO{i}"), "P1", status);
            wo.estimated_budget = Some(1000.0);
            wo
        })
        .collect();
        let classified = WorkOrderClassifier::new().classify(&orders, date(2024, 6, 1));

        assert!((calc.earned_value(&classified) - 1000.0).abs() < 1e-9);
        assert!((calc.total_estimated_budget(&classified) - 3000.0).abs() < 1e-9);
    }
}
