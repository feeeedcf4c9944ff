// ==========================================
// 项目指标引擎 - 导入层
// ==========================================
// 职责: 上游松散记录 → 强类型快照 (唯一的归一化/校验入口)
// 支持: serde_json::Value (API 层已加载的数据)
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod raw_record;
pub mod snapshot_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use raw_record::{RawProjectRecord, RawWorkOrderRecord};
pub use snapshot_importer::SnapshotImporter;
