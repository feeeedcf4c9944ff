// ==========================================
// 日志系统初始化
// ==========================================
// 库本身不安装订阅者, 由宿主进程按需调用其一
// 全局订阅者只能安装一次: 后续调用返回 false, 不 panic
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

// 未设置 RUST_LOG 时的过滤规则
const DEFAULT_FILTER: &str = "project_metrics=info";

/// 读取 RUST_LOG, 缺失或非法时回退到 `default`
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 初始化文本格式日志
///
/// # 环境变量
/// - RUST_LOG: 例如 `RUST_LOG=project_metrics=debug`
///
/// # 返回
/// 本次调用是否安装了订阅者
///
/// # 示例
/// ```no_run
/// use project_metrics::logging;
/// logging::init();
/// ```
pub fn init() -> bool {
    fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .is_ok()
}

/// 初始化 JSON 格式日志 (每次计算的 project_id span 字段随事件输出)
pub fn init_json() -> bool {
    fmt()
        .json()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_current_span(true)
        .try_init()
        .is_ok()
}

/// 测试日志 (debug 级别, 输出交给测试框架捕获)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
