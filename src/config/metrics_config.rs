// ==========================================
// 项目指标引擎 - 指标配置
// ==========================================
// 职责: 集中管理所有公式常量 (挣值折算、权重、阈值)
// 来源: 代码默认值 → JSON 文件 → key-value 覆写
// 红线: 计算引擎不得内联任何阈值或权重
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::HealthLabel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// 配置键 (key-value 覆写)
// ==========================================
pub mod config_keys {
    // 挣值折算
    pub const IN_PROGRESS_CREDIT: &str = "in_progress_credit";

    // 综合进度权重
    pub const PROGRESS_WEIGHT_WORK_ORDERS: &str = "progress_weight_work_orders";
    pub const PROGRESS_WEIGHT_SCHEDULE: &str = "progress_weight_schedule";
    pub const PROGRESS_WEIGHT_EARNED_VALUE: &str = "progress_weight_earned_value";

    // 风险指数权重
    pub const RISK_WEIGHT_OVERDUE: &str = "risk_weight_overdue";
    pub const RISK_WEIGHT_COST_OVERRUN: &str = "risk_weight_cost_overrun";

    // 健康度权重
    pub const HEALTH_WEIGHT_SCHEDULE: &str = "health_weight_schedule";
    pub const HEALTH_WEIGHT_COST: &str = "health_weight_cost";
    pub const HEALTH_WEIGHT_COMPLETION: &str = "health_weight_completion";
    pub const HEALTH_WEIGHT_RISK: &str = "health_weight_risk";

    // 健康度分档 (下界包含)
    pub const HEALTH_THRESHOLD_EXCELLENT: &str = "health_threshold_excellent";
    pub const HEALTH_THRESHOLD_GOOD: &str = "health_threshold_good";
    pub const HEALTH_THRESHOLD_FAIR: &str = "health_threshold_fair";

    // 健康度归一化
    pub const INDEX_FLOOR: &str = "index_floor";
    pub const NEUTRAL_HEALTH_SCORE: &str = "neutral_health_score";

    // 徽标容差
    pub const STATUS_TOLERANCE: &str = "status_tolerance";
}

// ==========================================
// ProgressWeights - 综合进度权重
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressWeights {
    pub work_orders: f64,  // 工单完成率
    pub schedule: f64,     // 计划时间消耗
    pub earned_value: f64, // 挣值进度
}

impl Default for ProgressWeights {
    fn default() -> Self {
        Self {
            work_orders: 0.50,
            schedule: 0.20,
            earned_value: 0.30,
        }
    }
}

impl ProgressWeights {
    /// 归一化权重 (和为 1; 全为 0 时回退默认值)
    pub fn normalized(&self) -> Self {
        let total = self.work_orders + self.schedule + self.earned_value;
        if total <= 0.0 {
            return Self::default();
        }
        Self {
            work_orders: self.work_orders / total,
            schedule: self.schedule / total,
            earned_value: self.earned_value / total,
        }
    }
}

// ==========================================
// RiskWeights - 风险指数权重
// ==========================================
// riskIndex = overdueRatio × overdue + costOverrunRatio × cost_overrun
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    pub overdue: f64,
    pub cost_overrun: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            overdue: 50.0,
            cost_overrun: 50.0,
        }
    }
}

// ==========================================
// HealthWeights - 健康度权重
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthWeights {
    pub schedule: f64,   // SPI
    pub cost: f64,       // CPI
    pub completion: f64, // 工单完成率
    pub risk: f64,       // 100 - riskIndex
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            schedule: 0.35,
            cost: 0.35,
            completion: 0.20,
            risk: 0.10,
        }
    }
}

impl HealthWeights {
    pub fn total(&self) -> f64 {
        self.schedule + self.cost + self.completion + self.risk
    }
}

// ==========================================
// HealthThresholds - 健康度分档阈值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            excellent: 80.0,
            good: 60.0,
            fair: 40.0,
        }
    }
}

impl HealthThresholds {
    /// 分数 → 标签 (下界包含)
    pub fn label_for(&self, score: f64) -> HealthLabel {
        if score >= self.excellent {
            HealthLabel::Excellent
        } else if score >= self.good {
            HealthLabel::Good
        } else if score >= self.fair {
            HealthLabel::Fair
        } else {
            HealthLabel::Poor
        }
    }
}

// ==========================================
// MetricsConfig - 指标配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// 进行中工单的挣值/完成度折算比例
    pub in_progress_credit: f64,

    pub progress_weights: ProgressWeights,
    pub risk_weights: RiskWeights,
    pub health_weights: HealthWeights,
    pub health_thresholds: HealthThresholds,

    /// SPI/CPI 归一化下限: 不高于该值记 0 分, 不低于 1.0 记满分
    pub index_floor: f64,

    /// 无有效工单时的健康度
    pub neutral_health_score: f64,

    /// 徽标容差带 (1.0 ± tolerance 视为正常)
    pub status_tolerance: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            in_progress_credit: 0.50,
            progress_weights: ProgressWeights::default(),
            risk_weights: RiskWeights::default(),
            health_weights: HealthWeights::default(),
            health_thresholds: HealthThresholds::default(),
            index_floor: 0.50,
            neutral_health_score: 50.0,
            status_tolerance: 0.02,
        }
    }
}

impl MetricsConfig {
    // ==========================================
    // 加载
    // ==========================================

    /// 从 JSON 字符串加载配置
    ///
    /// 缺失字段使用默认值, 加载后执行校验
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: MetricsConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载配置
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "加载指标配置文件");
        Self::from_json_str(&raw)
    }

    // ==========================================
    // key-value 覆写
    // ==========================================

    /// 应用 key-value 覆写 (键见 `config_keys`)
    ///
    /// # 规则
    /// - 未知键: 记录警告并忽略
    /// - 值无法解析为数字: 返回 InvalidValue
    /// - 覆写完成后重新校验
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> ConfigResult<()> {
        let mut keys: Vec<&String> = overrides.keys().collect();
        keys.sort();

        for key in keys {
            let raw = &overrides[key];
            let slot = match self.slot_mut(key) {
                Some(slot) => slot,
                None => {
                    tracing::warn!(config_key = %key, "未知配置键, 已忽略");
                    continue;
                }
            };

            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: key.clone(),
                    value: raw.clone(),
                    message: e.to_string(),
                })?;
            *slot = value;
        }

        self.validate()
    }

    /// 配置键 → 字段
    fn slot_mut(&mut self, key: &str) -> Option<&mut f64> {
        let slot = match key {
            config_keys::IN_PROGRESS_CREDIT => &mut self.in_progress_credit,
            config_keys::PROGRESS_WEIGHT_WORK_ORDERS => &mut self.progress_weights.work_orders,
            config_keys::PROGRESS_WEIGHT_SCHEDULE => &mut self.progress_weights.schedule,
            config_keys::PROGRESS_WEIGHT_EARNED_VALUE => &mut self.progress_weights.earned_value,
            config_keys::RISK_WEIGHT_OVERDUE => &mut self.risk_weights.overdue,
            config_keys::RISK_WEIGHT_COST_OVERRUN => &mut self.risk_weights.cost_overrun,
            config_keys::HEALTH_WEIGHT_SCHEDULE => &mut self.health_weights.schedule,
            config_keys::HEALTH_WEIGHT_COST => &mut self.health_weights.cost,
            config_keys::HEALTH_WEIGHT_COMPLETION => &mut self.health_weights.completion,
            config_keys::HEALTH_WEIGHT_RISK => &mut self.health_weights.risk,
            config_keys::HEALTH_THRESHOLD_EXCELLENT => &mut self.health_thresholds.excellent,
            config_keys::HEALTH_THRESHOLD_GOOD => &mut self.health_thresholds.good,
            config_keys::HEALTH_THRESHOLD_FAIR => &mut self.health_thresholds.fair,
            config_keys::INDEX_FLOOR => &mut self.index_floor,
            config_keys::NEUTRAL_HEALTH_SCORE => &mut self.neutral_health_score,
            config_keys::STATUS_TOLERANCE => &mut self.status_tolerance,
            _ => return None,
        };
        Some(slot)
    }

    // ==========================================
    // 校验
    // ==========================================

    /// 校验配置
    ///
    /// # 规则
    /// - 所有权重有限且非负; 健康度权重之和 > 0
    /// - 0 < fair < good < excellent <= 100
    /// - in_progress_credit ∈ [0, 1], index_floor ∈ [0, 1)
    /// - neutral_health_score ∈ [0, 100], status_tolerance >= 0
    pub fn validate(&self) -> ConfigResult<()> {
        let weights = [
            (config_keys::PROGRESS_WEIGHT_WORK_ORDERS, self.progress_weights.work_orders),
            (config_keys::PROGRESS_WEIGHT_SCHEDULE, self.progress_weights.schedule),
            (config_keys::PROGRESS_WEIGHT_EARNED_VALUE, self.progress_weights.earned_value),
            (config_keys::RISK_WEIGHT_OVERDUE, self.risk_weights.overdue),
            (config_keys::RISK_WEIGHT_COST_OVERRUN, self.risk_weights.cost_overrun),
            (config_keys::HEALTH_WEIGHT_SCHEDULE, self.health_weights.schedule),
            (config_keys::HEALTH_WEIGHT_COST, self.health_weights.cost),
            (config_keys::HEALTH_WEIGHT_COMPLETION, self.health_weights.completion),
            (config_keys::HEALTH_WEIGHT_RISK, self.health_weights.risk),
            (config_keys::STATUS_TOLERANCE, self.status_tolerance),
        ];
        for (key, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} 必须为非负有限数, 实际 {}",
                    key, value
                )));
            }
        }

        if self.health_weights.total() <= 0.0 {
            return Err(ConfigError::Invalid("健康度权重之和必须大于 0".to_string()));
        }

        let t = &self.health_thresholds;
        if !(t.fair > 0.0 && t.fair < t.good && t.good < t.excellent && t.excellent <= 100.0) {
            return Err(ConfigError::Invalid(format!(
                "健康度阈值必须满足 0 < fair < good < excellent <= 100, 实际 fair={} good={} excellent={}",
                t.fair, t.good, t.excellent
            )));
        }

        if !(0.0..=1.0).contains(&self.in_progress_credit) {
            return Err(ConfigError::Invalid(format!(
                "{} 必须位于 [0, 1], 实际 {}",
                config_keys::IN_PROGRESS_CREDIT,
                self.in_progress_credit
            )));
        }

        if !(0.0..1.0).contains(&self.index_floor) {
            return Err(ConfigError::Invalid(format!(
                "{} 必须位于 [0, 1), 实际 {}",
                config_keys::INDEX_FLOOR,
                self.index_floor
            )));
        }

        if !(0.0..=100.0).contains(&self.neutral_health_score) {
            return Err(ConfigError::Invalid(format!(
                "{} 必须位于 [0, 100], 实际 {}",
                config_keys::NEUTRAL_HEALTH_SCORE,
                self.neutral_health_score
            )));
        }

        Ok(())
    }
}
