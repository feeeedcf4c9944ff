// ==========================================
// 项目指标引擎 - 配置层
// ==========================================
// 职责: 公式常量集中管理, 支持 JSON 加载与 key-value 覆写
// ==========================================

pub mod error;
pub mod metrics_config;

// 重导出核心配置
pub use error::{ConfigError, ConfigResult};
pub use metrics_config::{
    config_keys, HealthThresholds, HealthWeights, MetricsConfig, ProgressWeights, RiskWeights,
};
