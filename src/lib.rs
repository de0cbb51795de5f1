//! # Add User Form
//!
//! 一个录入用户姓名和年龄的单页表单：本地校验，提交到远端 API，并展示已提交的用户列表
//!
//! ## 架构设计
//!
//! ### ① 数据与校验
//! - `models/` - `UserRecord`、`UserList`、`FormState`
//! - `validation/` - 字段规则表，纯函数
//!
//! ### ② 外部能力（Clients）
//! - `clients/` - `UserApi` trait 与基于 reqwest 的 `UserClient`
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `SubmissionController`：校验 → 创建 → 乐观追加
//!
//! ### ④ 界面与编排
//! - `ui/` - 文本渲染与终端事件循环
//! - `app` - 组装配置、控制器和会话

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;
pub mod validation;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{UserApi, UserClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{FormInput, FormState, UserList, UserRecord};
pub use validation::{validate, Field, FieldErrors, ValidationError};
pub use workflow::{SubmissionController, SubmissionState, SubmitOutcome};
