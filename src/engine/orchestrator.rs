// ==========================================
// 项目指标引擎 - 指标门面 (编排器)
// ==========================================
// 用途: 唯一对外入口, 按依赖顺序协调七个计算器并组装结果
// 顺序: 分类 → 成本(AC) → 进度 → 工期 → 成本 → 人力 → 质量风险 → 健康度
// 红线: 纯计算, 无 I/O, 无共享可变状态; 相同输入 + 相同 today 结果相同
// ==========================================

use crate::config::MetricsConfig;
use crate::domain::metrics::MetricsResult;
use crate::domain::project::Project;
use crate::domain::work_order::WorkOrder;
use crate::engine::classifier::WorkOrderClassifier;
use crate::engine::cost::CostCalculator;
use crate::engine::error::MetricsError;
use crate::engine::health::{HealthInputs, HealthScoreAggregator};
use crate::engine::progress::ProgressCalculator;
use crate::engine::quality::QualityRiskCalculator;
use crate::engine::schedule::ScheduleCalculator;
use crate::engine::workforce::WorkforceCalculator;
use crate::importer::SnapshotImporter;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

// ==========================================
// MetricsFacade - 指标门面
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MetricsFacade {
    config: MetricsConfig,
}

impl MetricsFacade {
    /// 使用默认配置创建门面
    pub fn new() -> Self {
        Self {
            config: MetricsConfig::default(),
        }
    }

    /// 使用自定义配置创建门面 (先校验配置)
    pub fn with_config(config: MetricsConfig) -> Result<Self, MetricsError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// 计算项目指标
    ///
    /// # 参数
    /// - `project`: 项目快照
    /// - `work_orders`: 该项目的全部工单
    /// - `today`: 计算基准日 (由调用方注入, 不读系统时钟)
    ///
    /// # 返回
    /// - Ok(MetricsResult): 六个分区的完整结果
    /// - Err(MetricsError): 输入快照不一致 (集成错误)
    #[instrument(skip_all, fields(project_id = %project.id))]
    pub fn compute(
        &self,
        project: &Project,
        work_orders: &[WorkOrder],
        today: NaiveDate,
    ) -> Result<MetricsResult, MetricsError> {
        info!(
            work_orders_count = work_orders.len(),
            as_of = %today,
            "开始计算项目指标"
        );

        // ==========================================
        // 步骤0: 快照校验
        // ==========================================
        self.validate_snapshot(project, work_orders)?;

        // ==========================================
        // 步骤1: 工单分类
        // ==========================================
        debug!("步骤1: 工单分类");
        let classified = WorkOrderClassifier::new().classify(work_orders, today);

        // ==========================================
        // 步骤2: 进度 (EV / PV / SPI / CPI)
        // ==========================================
        debug!("步骤2: 计算进度指标");
        let cost_calculator = CostCalculator::new();
        let actual_cost = cost_calculator.actual_cost(project, &classified);
        let progress =
            ProgressCalculator::new(&self.config).calculate(project, &classified, actual_cost, today);

        // ==========================================
        // 步骤3: 工期
        // ==========================================
        debug!("步骤3: 计算工期指标");
        let schedule = ScheduleCalculator::new().calculate(project, progress.spi, today);

        // ==========================================
        // 步骤4: 成本
        // ==========================================
        debug!("步骤4: 计算成本指标");
        let cost = cost_calculator.calculate(
            actual_cost,
            progress.earned_value,
            progress.cpi,
            progress.details.budget.total_estimated,
        );

        // ==========================================
        // 步骤5: 人力
        // ==========================================
        debug!("步骤5: 计算人力指标");
        let workforce = WorkforceCalculator::new().calculate(project, &classified);

        // ==========================================
        // 步骤6: 质量与风险
        // ==========================================
        debug!("步骤6: 计算质量与风险指标");
        let quality = QualityRiskCalculator::new(&self.config.risk_weights).calculate(&classified);

        // ==========================================
        // 步骤7: 健康度
        // ==========================================
        debug!("步骤7: 聚合健康度");
        let health = HealthScoreAggregator::new(&self.config).aggregate(&HealthInputs {
            spi: progress.spi,
            cpi: progress.cpi,
            work_order_completion: progress.work_order_completion,
            risk_index: quality.risk_index,
            active_work_orders: classified.active_total(),
            schedule_variance: schedule.schedule_variance,
            forecast_end_date: schedule.forecast_end_date,
        });

        info!(
            health_score = health.health_score,
            label = %health.label,
            risk_index = quality.risk_index,
            "项目指标计算完成"
        );

        Ok(MetricsResult {
            project_id: project.id.clone(),
            as_of: today,
            progress,
            schedule,
            cost,
            workforce,
            quality,
            health,
        })
    }

    /// 从松散 JSON 快照计算 (先归一化, 再计算)
    pub fn compute_from_json(
        &self,
        project: &Value,
        work_orders: &Value,
        today: NaiveDate,
    ) -> Result<MetricsResult, MetricsError> {
        let (project, work_orders) = SnapshotImporter::new().import_snapshot(project, work_orders)?;
        self.compute(&project, &work_orders, today)
    }

    // ==========================================
    // 快照校验
    // ==========================================

    /// 校验快照一致性
    ///
    /// # 规则
    /// - 工单的 project_id 必须等于项目ID
    /// - 工单ID不可重复
    /// - 优先级位于 1-5
    /// - 已给出的金额必须是有限数
    pub fn validate_snapshot(
        &self,
        project: &Project,
        work_orders: &[WorkOrder],
    ) -> Result<(), MetricsError> {
        let project_record = format!("project#{}", project.id);
        check_finite(&project_record, "estimatedBudget", project.estimated_budget)?;
        check_finite(&project_record, "actualCost", project.actual_cost)?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(work_orders.len());
        for wo in work_orders {
            if wo.project_id != project.id {
                return Err(MetricsError::ProjectMismatch {
                    work_order_id: wo.id.clone(),
                    expected: project.id.clone(),
                    actual: wo.project_id.clone(),
                });
            }

            if !seen.insert(wo.id.as_str()) {
                return Err(MetricsError::DuplicateWorkOrder {
                    work_order_id: wo.id.clone(),
                });
            }

            if !(1..=5).contains(&wo.priority) {
                return Err(MetricsError::PriorityOutOfRange {
                    work_order_id: wo.id.clone(),
                    priority: wo.priority,
                });
            }

            let record = format!("work_order#{}", wo.id);
            check_finite(&record, "estimatedBudget", wo.estimated_budget)?;
            check_finite(&record, "actualCost", wo.actual_cost)?;
        }

        Ok(())
    }
}

fn check_finite(record: &str, field: &str, amount: Option<f64>) -> Result<(), MetricsError> {
    match amount {
        Some(value) if !value.is_finite() => Err(MetricsError::NonFiniteAmount {
            record: record.to_string(),
            field: field.to_string(),
        }),
        _ => Ok(()),
    }
}

/// 使用默认配置计算项目指标
pub fn compute_metrics(
    project: &Project,
    work_orders: &[WorkOrder],
    today: NaiveDate,
) -> Result<MetricsResult, MetricsError> {
    MetricsFacade::new().compute(project, work_orders, today)
}
