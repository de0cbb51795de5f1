use add_user_form::utils::logging;
use add_user_form::{App, Config};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().await?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(&config)?.run().await?;

    Ok(())
}
