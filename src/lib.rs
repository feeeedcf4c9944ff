// ==========================================
// 项目指标引擎 - 核心库
// ==========================================
// 定位: 项目/工单跟踪系统中的挣值分析 (EVM) 模块
// 输入: 已加载的项目 + 工单快照 + 注入的 today
// 输出: MetricsResult (progress / schedule / cost / workforce / quality / health)
// 边界: 不读写数据库, 不做网络请求, 不渲染界面
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 指标计算
pub mod engine;

// 导入层 - 松散记录归一化
pub mod importer;

// 配置层 - 公式常量
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CostStatus, HealthLabel, ProjectStatus, ScheduleStatus, WorkOrderStatus};

// 领域实体
pub use domain::{CrewMember, MetricsResult, Project, WorkOrder};

// 引擎
pub use engine::{compute_metrics, MetricsError, MetricsFacade};

// 导入
pub use importer::{ImportError, SnapshotImporter};

// 配置
pub use config::{ConfigError, MetricsConfig};

// ==========================================
// 常量定义
// ==========================================

// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
