// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use project_metrics::domain::project::{CrewMember, Project};
use project_metrics::domain::types::{ProjectStatus, WorkOrderStatus};
use project_metrics::domain::work_order::WorkOrder;

/// 构造日期 (测试专用)
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// Project 构建器
// ==========================================

pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            project: Project::new(id),
        }
    }

    /// 计划窗口
    pub fn planned(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.project.start_date = Some(start);
        self.project.end_date = Some(end);
        self
    }

    pub fn actual_start(mut self, date: NaiveDate) -> Self {
        self.project.actual_start_date = Some(date);
        self
    }

    pub fn actual_end(mut self, date: NaiveDate) -> Self {
        self.project.actual_end_date = Some(date);
        self
    }

    pub fn budget(mut self, budget: f64) -> Self {
        self.project.estimated_budget = Some(budget);
        self
    }

    pub fn actual_cost(mut self, cost: f64) -> Self {
        self.project.actual_cost = Some(cost);
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.project.status = status;
        self
    }

    /// 添加班组成员
    pub fn crew(mut self, worker_id: &str, is_active: bool) -> Self {
        self.project
            .crew_members
            .push(CrewMember::new(worker_id, is_active));
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}

// ==========================================
// WorkOrder 构建器
// ==========================================

pub struct WorkOrderBuilder {
    work_order: WorkOrder,
}

impl WorkOrderBuilder {
    pub fn new(id: &str, project_id: &str) -> Self {
        Self {
            work_order: WorkOrder::new(id, project_id, WorkOrderStatus::Pending),
        }
    }

    pub fn status(mut self, status: WorkOrderStatus) -> Self {
        self.work_order.status = status;
        self
    }

    pub fn priority(mut self, priority: u8) -> Self {
        self.work_order.priority = priority;
        self
    }

    pub fn planned(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.work_order.start_date = Some(start);
        self.work_order.end_date = Some(end);
        self
    }

    pub fn due(mut self, end: NaiveDate) -> Self {
        self.work_order.end_date = Some(end);
        self
    }

    pub fn actual(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.work_order.actual_start_date = Some(start);
        self.work_order.actual_end_date = Some(end);
        self
    }

    pub fn budget(mut self, budget: f64) -> Self {
        self.work_order.estimated_budget = Some(budget);
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.work_order.actual_cost = Some(cost);
        self
    }

    pub fn worker(mut self, worker_id: &str) -> Self {
        self.work_order.assigned_workers.push(worker_id.to_string());
        self
    }

    pub fn build(self) -> WorkOrder {
        self.work_order
    }
}

// ==========================================
// 常用场景
// ==========================================

/// 2024 全年计划窗口的项目 (365 天)
pub fn project_2024(id: &str) -> ProjectBuilder {
    ProjectBuilder::new(id).planned(date(2024, 1, 1), date(2024, 12, 31))
}

/// 已完成 / 进行中 / 已取消 各一单, 预算各 10000
pub fn three_orders(project_id: &str) -> Vec<WorkOrder> {
    vec![
        WorkOrderBuilder::new("WO-1", project_id)
            .status(WorkOrderStatus::Completed)
            .budget(10000.0)
            .build(),
        WorkOrderBuilder::new("WO-2", project_id)
            .status(WorkOrderStatus::InProgress)
            .budget(10000.0)
            .build(),
        WorkOrderBuilder::new("WO-3", project_id)
            .status(WorkOrderStatus::Cancelled)
            .budget(10000.0)
            .build(),
    ]
}
