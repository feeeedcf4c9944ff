// ==========================================
// 项目指标引擎 - 快照导入器
// ==========================================
// 职责: 上游已加载的项目/工单 JSON → 强类型快照
// 输入: 项目 JSON 对象 + 工单 JSON 数组
// 输出: (Project, Vec<WorkOrder>)
// 红线: 结构/类型错误立即失败并定位到记录与字段, 不做静默修正
// ==========================================

use crate::domain::project::{CrewMember, Project};
use crate::domain::types::{ProjectStatus, WorkOrderStatus};
use crate::domain::work_order::WorkOrder;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::raw_record::{RawProjectRecord, RawWorkOrderRecord};
use serde_json::Value;
use tracing::debug;

// ==========================================
// SnapshotImporter - 快照导入器
// ==========================================
// 无状态, 所有方法都是纯函数
pub struct SnapshotImporter;

impl SnapshotImporter {
    pub fn new() -> Self {
        Self
    }

    /// 导入完整快照
    ///
    /// # 参数
    /// - `project`: 项目 JSON 对象
    /// - `work_orders`: 工单 JSON 数组
    ///
    /// # 返回
    /// - Ok((Project, Vec<WorkOrder>))
    /// - Err(ImportError): 首个出错的记录与字段
    pub fn import_snapshot(
        &self,
        project: &Value,
        work_orders: &Value,
    ) -> ImportResult<(Project, Vec<WorkOrder>)> {
        if !project.is_object() {
            return Err(ImportError::InvalidType {
                record: "project".to_string(),
                field: "<root>".to_string(),
                expected: "object",
            });
        }
        let raw_project: RawProjectRecord = serde_json::from_value(project.clone())?;
        let project = self.import_project(&raw_project)?;

        let items = work_orders.as_array().ok_or_else(|| ImportError::InvalidType {
            record: format!("project#{}", project.id),
            field: "workOrders".to_string(),
            expected: "array",
        })?;

        let mut imported = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if !item.is_object() {
                return Err(ImportError::InvalidType {
                    record: format!("work_order[{}]", position),
                    field: "<root>".to_string(),
                    expected: "object",
                });
            }
            let raw: RawWorkOrderRecord = serde_json::from_value(item.clone())?;
            imported.push(self.import_work_order(&raw, position)?);
        }

        debug!(
            project_id = %project.id,
            work_orders_count = imported.len(),
            "快照导入完成"
        );

        Ok((project, imported))
    }

    /// 导入项目记录
    pub fn import_project(&self, raw: &RawProjectRecord) -> ImportResult<Project> {
        let id = FieldMapper::new("project").require_id(raw.id.as_ref(), "id")?;
        let m = FieldMapper::new(format!("project#{}", id));

        let status = m
            .parse_code(raw.status.as_ref(), "status", ProjectStatus::from_code)?
            .unwrap_or_default();

        let mut crew_members = Vec::new();
        for (idx, member) in m
            .parse_array(raw.crew_members.as_ref(), "crewMembers")?
            .iter()
            .enumerate()
        {
            crew_members.push(self.map_crew_member(&m, member, idx)?);
        }

        Ok(Project {
            start_date: m.parse_date(raw.start_date.as_ref(), "startDate")?,
            end_date: m.parse_date(raw.end_date.as_ref(), "endDate")?,
            actual_start_date: m.parse_date(raw.actual_start_date.as_ref(), "actualStartDate")?,
            actual_end_date: m.parse_date(raw.actual_end_date.as_ref(), "actualEndDate")?,
            estimated_budget: m.parse_amount(raw.estimated_budget.as_ref(), "estimatedBudget")?,
            actual_cost: m.parse_amount(raw.actual_cost.as_ref(), "actualCost")?,
            status,
            crew_members,
            id,
        })
    }

    /// 导入工单记录
    ///
    /// # 参数
    /// - `raw`: 原始工单
    /// - `position`: 在输入数组中的位置 (主键缺失时用于定位)
    pub fn import_work_order(
        &self,
        raw: &RawWorkOrderRecord,
        position: usize,
    ) -> ImportResult<WorkOrder> {
        let id = FieldMapper::new(format!("work_order[{}]", position))
            .require_id(raw.id.as_ref(), "id")?;
        let m = FieldMapper::new(format!("work_order#{}", id));

        let status = m
            .parse_code(raw.status.as_ref(), "status", WorkOrderStatus::from_code)?
            .ok_or_else(|| m.missing("status"))?;

        let mut assigned_workers = Vec::new();
        for worker in m.parse_array(raw.assigned_workers.as_ref(), "assignedWorkers")? {
            assigned_workers.push(m.require_id(Some(worker), "assignedWorkers")?);
        }

        Ok(WorkOrder {
            project_id: m.require_id(raw.project_id.as_ref(), "projectId")?,
            status,
            priority: m
                .parse_u8(raw.priority.as_ref(), "priority")?
                .unwrap_or(WorkOrder::DEFAULT_PRIORITY),
            start_date: m.parse_date(raw.start_date.as_ref(), "startDate")?,
            end_date: m.parse_date(raw.end_date.as_ref(), "endDate")?,
            actual_start_date: m.parse_date(raw.actual_start_date.as_ref(), "actualStartDate")?,
            actual_end_date: m.parse_date(raw.actual_end_date.as_ref(), "actualEndDate")?,
            estimated_budget: m.parse_amount(raw.estimated_budget.as_ref(), "estimatedBudget")?,
            actual_cost: m.parse_amount(raw.actual_cost.as_ref(), "actualCost")?,
            assigned_workers,
            id,
        })
    }

    /// 班组成员: {workerId, isActive} (isActive 缺省为 true)
    fn map_crew_member(
        &self,
        m: &FieldMapper,
        member: &Value,
        idx: usize,
    ) -> ImportResult<CrewMember> {
        let field = format!("crewMembers[{}]", idx);
        let obj = member.as_object().ok_or_else(|| ImportError::InvalidType {
            record: m.record().to_string(),
            field: field.clone(),
            expected: "object",
        })?;

        Ok(CrewMember {
            worker_id: m.require_id(obj.get("workerId"), &format!("{}.workerId", field))?,
            is_active: m.parse_bool(obj.get("isActive"), &format!("{}.isActive", field), true)?,
        })
    }
}

impl Default for SnapshotImporter {
    fn default() -> Self {
        Self::new()
    }
}
