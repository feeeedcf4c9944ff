// ==========================================
// 项目指标引擎 - 工单分类器
// ==========================================
// 职责: 按状态分区 + 逐单派生事实 (逾期/超支/实际工期)
// 输入: 工单列表 + 注入的 today
// 输出: ClassifiedWorkOrders (下游计算器共享)
// 红线: 不报错; 日期缺失只会让派生值为 None
// ==========================================

use crate::domain::metrics::StatusCounts;
use crate::domain::types::WorkOrderStatus;
use crate::domain::work_order::WorkOrder;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::warn;

// ==========================================
// WorkOrderFacts - 单个工单的派生事实
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrderFacts {
    pub work_order_id: String,
    pub status: WorkOrderStatus,
    /// 未完成/未取消 且 计划结束早于 today
    pub is_overdue: bool,
    /// 实际成本 > 预算 (两者都存在)
    pub is_cost_overrun: bool,
    /// 实际结束 - 实际开始 (天), 任一缺失为 None
    pub effective_duration_days: Option<i64>,
}

// ==========================================
// ClassifiedWorkOrders - 分类结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ClassifiedWorkOrders<'a> {
    orders: &'a [WorkOrder],
    partition: BTreeMap<WorkOrderStatus, Vec<&'a WorkOrder>>,
    facts: Vec<WorkOrderFacts>,
    counts: StatusCounts,
}

impl<'a> ClassifiedWorkOrders<'a> {
    /// 状态 → 工单列表 (五种状态的键总是存在)
    pub fn partition(&self) -> &BTreeMap<WorkOrderStatus, Vec<&'a WorkOrder>> {
        &self.partition
    }

    /// 指定状态的工单
    pub fn by_status(&self, status: WorkOrderStatus) -> &[&'a WorkOrder] {
        self.partition
            .get(&status)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// 逐单事实 (与输入顺序一致)
    pub fn facts(&self) -> &[WorkOrderFacts] {
        &self.facts
    }

    /// 状态计数
    pub fn counts(&self) -> StatusCounts {
        self.counts
    }

    /// 全部工单 (输入顺序)
    pub fn all(&self) -> &'a [WorkOrder] {
        self.orders
    }

    /// 有效工单 (非取消)
    pub fn active(&self) -> impl Iterator<Item = &'a WorkOrder> + '_ {
        self.orders.iter().filter(|wo| wo.status.is_active())
    }

    /// 有效工单数
    pub fn active_total(&self) -> usize {
        self.counts.active_total()
    }
}

// ==========================================
// WorkOrderClassifier - 工单分类器
// ==========================================
// 无状态引擎
pub struct WorkOrderClassifier;

impl WorkOrderClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 分类工单
    ///
    /// # 参数
    /// - `work_orders`: 项目的全部工单
    /// - `today`: 计算基准日
    pub fn classify<'a>(
        &self,
        work_orders: &'a [WorkOrder],
        today: NaiveDate,
    ) -> ClassifiedWorkOrders<'a> {
        let mut partition: BTreeMap<WorkOrderStatus, Vec<&'a WorkOrder>> = WorkOrderStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        let mut counts = StatusCounts::default();
        let mut facts = Vec::with_capacity(work_orders.len());

        for wo in work_orders {
            partition.entry(wo.status).or_default().push(wo);

            counts.total += 1;
            match wo.status {
                WorkOrderStatus::Pending => counts.pending += 1,
                WorkOrderStatus::InProgress => counts.in_progress += 1,
                WorkOrderStatus::OnHold => counts.on_hold += 1,
                WorkOrderStatus::Completed => counts.completed += 1,
                WorkOrderStatus::Cancelled => counts.cancelled += 1,
            }

            facts.push(WorkOrderFacts {
                work_order_id: wo.id.clone(),
                status: wo.status,
                is_overdue: self.is_overdue(wo, today),
                is_cost_overrun: self.is_cost_overrun(wo),
                effective_duration_days: self.effective_duration_days(wo),
            });
        }

        ClassifiedWorkOrders {
            orders: work_orders,
            partition,
            facts,
            counts,
        }
    }

    // ==========================================
    // 逐单判定
    // ==========================================

    /// 是否逾期: 状态不在 {completed, cancelled} 且 endDate < today
    pub fn is_overdue(&self, wo: &WorkOrder, today: NaiveDate) -> bool {
        if wo.status.is_closed() {
            return false;
        }
        matches!(wo.end_date, Some(end) if end < today)
    }

    /// 是否超支: actualCost > estimatedBudget (两者都存在)
    pub fn is_cost_overrun(&self, wo: &WorkOrder) -> bool {
        match (wo.actual_cost, wo.estimated_budget) {
            (Some(cost), Some(budget)) => cost > budget,
            _ => false,
        }
    }

    /// 实际工期 (整天)
    pub fn effective_duration_days(&self, wo: &WorkOrder) -> Option<i64> {
        let (start, end) = (wo.actual_start_date?, wo.actual_end_date?);
        let days = (end - start).num_days();
        if days < 0 {
            warn!(
                work_order_id = %wo.id,
                actual_start_date = %start,
                actual_end_date = %end,
                "工单实际结束早于实际开始"
            );
        }
        Some(days)
    }
}

impl Default for WorkOrderClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(id: &str, status: WorkOrderStatus) -> WorkOrder {
        WorkOrder::new(id, "P1", status)
    }

    #[test]
    fn test_partition_has_all_statuses() {
        let classifier = WorkOrderClassifier::new();
        let orders = vec![
            order("WO1", WorkOrderStatus::Completed),
            order("WO2", WorkOrderStatus::Completed),
            order("WO3", WorkOrderStatus::Cancelled),
        ];
        let classified = classifier.classify(&orders, date(2024, 6, 1));

        assert_eq!(classified.partition().len(), 5);
        assert_eq!(classified.by_status(WorkOrderStatus::Completed).len(), 2);
        assert!(classified.by_status(WorkOrderStatus::Pending).is_empty());

        let counts = classified.counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(classified.active_total(), 2);
        assert_eq!(classified.active().count(), 2);
    }

    #[test]
    fn test_overdue_depends_on_status() {
        let classifier = WorkOrderClassifier::new();
        let today = date(2024, 6, 1);

        let mut wo = order("WO1", WorkOrderStatus::InProgress);
        wo.end_date = Some(date(2024, 5, 31));
        assert!(classifier.is_overdue(&wo, today));

        wo.status = WorkOrderStatus::Completed;
        assert!(!classifier.is_overdue(&wo, today));

        wo.status = WorkOrderStatus::Cancelled;
        assert!(!classifier.is_overdue(&wo, today));

        // 截止日当天不算逾期
        wo.status = WorkOrderStatus::Pending;
        wo.end_date = Some(today);
        assert!(!classifier.is_overdue(&wo, today));

        wo.end_date = None;
        assert!(!classifier.is_overdue(&wo, today));
    }

    #[test]
    fn test_cost_overrun_requires_both_amounts() {
        let classifier = WorkOrderClassifier::new();
        let mut wo = order("WO1", WorkOrderStatus::Completed);
        wo.actual_cost = Some(1200.0);
        assert!(!classifier.is_cost_overrun(&wo));

        wo.estimated_budget = Some(1000.0);
        assert!(classifier.is_cost_overrun(&wo));

        wo.estimated_budget = Some(1200.0);
        assert!(!classifier.is_cost_overrun(&wo));
    }

    #[test]
    fn test_effective_duration() {
        let classifier = WorkOrderClassifier::new();
        let mut wo = order("WO1", WorkOrderStatus::Completed);
        assert_eq!(classifier.effective_duration_days(&wo), None);

        wo.actual_start_date = Some(date(2024, 3, 1));
        assert_eq!(classifier.effective_duration_days(&wo), None);

        wo.actual_end_date = Some(date(2024, 3, 11));
        assert_eq!(classifier.effective_duration_days(&wo), Some(10));
    }
}
