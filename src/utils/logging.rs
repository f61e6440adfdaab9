/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时按 `verbose` 选择 debug 或 info。
/// 日志输出到 stderr，stdout 留给交互界面
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recipe_quiz={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `endpoint`: 菜谱接口地址
/// - `question_count`: 题目数量
/// - `source`: 问卷来源（内置或文件路径）
pub fn log_startup(endpoint: &str, question_count: usize, source: &str) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 菜谱接口: {}", endpoint);
    info!("📋 问卷: {} 道题 ({})", question_count, source);
    info!("{}", "=".repeat(60));
}

/// 打印会话统计信息
///
/// # 参数
/// - `started`: 开始的会话数
/// - `recipes`: 成功生成的菜谱数
/// - `abandoned`: 放弃的会话数
pub fn print_session_stats(started: usize, recipes: usize, abandoned: usize) {
    info!("{}", "─".repeat(60));
    info!(
        "📊 结束时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("开始问卷: {}", started);
    info!("✅ 生成菜谱: {}", recipes);
    info!("↩️ 放弃: {}", abandoned);
    info!("{}", "─".repeat(60));
}
