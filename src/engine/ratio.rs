// ==========================================
// 项目指标引擎 - 比值工具
// ==========================================
// 红线: 分母为零/非正/非有限时返回 None, 不产生 NaN 或 Infinity
// ==========================================

/// 安全比值: 分母为正的有限数时返回 numerator / denominator
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 && denominator.is_finite() && numerator.is_finite() {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// 截断到 [0, 1]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// 截断到 [0, 100]
pub fn clamp_percent(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}
