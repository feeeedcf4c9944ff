// ==========================================
// 项目指标引擎 - 工期计算器
// ==========================================
// 职责: 计划工期 / 实际工期 / 工期偏差 / 预测完工日
// 输入: 项目日期 + SPI (来自进度计算器) + today
// 输出: ScheduleMetrics (schedule 分区)
// 说明: 预测完工日只做线性外推, 不做关键路径分析
// ==========================================

use crate::domain::metrics::ScheduleMetrics;
use crate::domain::project::Project;
use chrono::{Days, NaiveDate};
use tracing::warn;

// 无状态引擎
pub struct ScheduleCalculator;

impl ScheduleCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算 schedule 分区
    pub fn calculate(&self, project: &Project, spi: Option<f64>, today: NaiveDate) -> ScheduleMetrics {
        let planned_duration = project.planned_duration_days();
        let actual_duration = self.actual_duration(project, today);

        let schedule_variance = match (planned_duration, actual_duration) {
            (Some(planned), Some(actual)) => Some(planned - actual),
            _ => None,
        };

        ScheduleMetrics {
            planned_duration,
            actual_duration,
            schedule_variance,
            forecast_end_date: self.forecast_end_date(project.start_date, planned_duration, spi),
            spi,
        }
    }

    /// 实际工期 (天)
    ///
    /// # 规则
    /// - 实际开始缺失: None
    /// - 已有实际结束 (项目完工): 实际结束 - 实际开始
    /// - 否则 (进行中): today - 实际开始
    pub fn actual_duration(&self, project: &Project, today: NaiveDate) -> Option<i64> {
        let start = project.actual_start_date?;
        let end = project.actual_end_date.unwrap_or(today);
        let days = (end - start).num_days();

        if days < 0 {
            warn!(
                project_id = %project.id,
                actual_start_date = %start,
                until = %end,
                "项目实际工期为负"
            );
        }
        Some(days)
    }

    /// 预测完工日 = 计划开始 + trunc(计划工期 / SPI)
    ///
    /// SPI 须为正有限数, 计划工期须为正; 日历溢出返回 None
    pub fn forecast_end_date(
        &self,
        start_date: Option<NaiveDate>,
        planned_duration: Option<i64>,
        spi: Option<f64>,
    ) -> Option<NaiveDate> {
        let start = start_date?;
        let planned = planned_duration.filter(|d| *d > 0)?;
        let spi = spi.filter(|s| s.is_finite() && *s > 0.0)?;

        let offset = (planned as f64 / spi).trunc();
        if !offset.is_finite() || offset < 0.0 || offset > u32::MAX as f64 {
            return None;
        }

        start.checked_add_days(Days::new(offset as u64))
    }
}

impl Default for ScheduleCalculator {
    fn default() -> Self {
        Self::new()
    }
}
