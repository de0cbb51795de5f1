//! 日志工具模块
//!
//! 日志统一写到 stderr，stdout 留给页面渲染

use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// `RUST_LOG` 优先；未设置时按 `verbose` 选择 info / debug
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "add_user_form=debug"
    } else {
        "add_user_form=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // 重复初始化（例如测试里）时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 用户信息录入");
    info!("🌐 API 地址: {}", config.base_url);
    info!("⏱️ 请求超时: {} 秒", config.request_timeout_secs);
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}
