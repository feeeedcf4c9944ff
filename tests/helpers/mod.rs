// ==========================================
// 集成测试公共辅助
// ==========================================

#![allow(dead_code)]

pub mod test_data_builder;

/// 浮点比较
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// 测试日志 (重复调用安全)
pub fn init_test_logging() {
    project_metrics::logging::init_test();
}
