//! 应用入口 - 编排层
//!
//! 负责把配置、控制器和终端会话串起来，不包含业务判断

use crate::clients::UserClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::ui;
use crate::utils::logging;
use crate::workflow::SubmissionController;
use tokio::io::BufReader;

/// 应用主结构
pub struct App {
    controller: SubmissionController<UserClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: &Config) -> AppResult<Self> {
        logging::log_startup(config);

        let controller = SubmissionController::from_config(config)?;

        Ok(Self { controller })
    }

    /// 运行应用主逻辑：在 stdin/stdout 上跑一次会话
    pub async fn run(mut self) -> AppResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        ui::run_session(&mut self.controller, stdin, stdout).await
    }
}
