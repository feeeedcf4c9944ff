// ==========================================
// 项目指标引擎 - 引擎层错误类型
// ==========================================
// 职责: 输入快照校验失败 (集成/调用方错误), 定位到工单ID与字段
// 说明: 可选字段缺失不是错误, 只会令对应指标为 null
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// 指标计算错误类型
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("快照导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("配置无效: {0}")]
    Config(#[from] ConfigError),

    #[error("工单归属不一致: work_order={work_order_id}, 期望 project={expected}, 实际 project={actual}")]
    ProjectMismatch {
        work_order_id: String,
        expected: String,
        actual: String,
    },

    #[error("工单ID重复: work_order={work_order_id}")]
    DuplicateWorkOrder { work_order_id: String },

    #[error("工单优先级越界: work_order={work_order_id}, priority={priority} (允许 1-5)")]
    PriorityOutOfRange { work_order_id: String, priority: u8 },

    #[error("金额非有限数 ({record}, 字段 {field})")]
    NonFiniteAmount { record: String, field: String },
}
