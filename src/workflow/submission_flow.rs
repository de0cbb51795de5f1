//! 提交流程 - 流程层
//!
//! 核心职责：持有用户列表和表单状态，定义"一次提交"的完整流程
//!
//! 流程顺序：
//! 1. 写入表单输入 → 校验
//! 2. 校验失败：记录字段错误，不发请求
//! 3. 校验通过：POST 创建 → 成功则追加到本地列表
//!
//! 网络失败只写日志，不向界面暴露，也不重试

use tracing::{debug, error, info};

use crate::clients::{UserApi, UserClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{FormInput, FormState, UserList, UserRecord};
use crate::validation::{self, FieldErrors};

/// 控制器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
}

/// 单次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 校验未通过，没有发出请求
    Invalid(FieldErrors),
    /// 创建成功，记录已追加到列表
    Created(UserRecord),
    /// 创建请求失败，列表未变化
    Failed,
}

/// 提交控制器
///
/// - 唯一持有 `UserList`，所有修改都经过 `&mut self`
/// - 不读取进程环境，基础地址由构造时注入的客户端决定
pub struct SubmissionController<A: UserApi> {
    api: A,
    users: UserList,
    form: FormState,
    state: SubmissionState,
}

impl SubmissionController<UserClient> {
    /// 按配置创建基于 HTTP 的控制器
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(UserClient::new(config)?))
    }
}

impl<A: UserApi> SubmissionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: UserList::new(),
            form: FormState::default(),
            state: SubmissionState::Idle,
        }
    }

    /// 挂载时调用一次：拉取全部用户替换本地列表
    ///
    /// # 返回
    /// 是否成功加载；失败时列表保持原样，只记录日志
    pub async fn load_initial_list(&mut self) -> bool {
        match self.api.fetch_users().await {
            Ok(users) => {
                info!("✓ 初始列表加载完成，共 {} 个用户", users.len());
                self.users.replace(users);
                true
            }
            Err(e) => {
                error!("❌ 初始列表加载失败: {}", e);
                false
            }
        }
    }

    /// 提交表单
    pub async fn submit(&mut self, input: FormInput) -> SubmitOutcome {
        self.transition(SubmissionState::Validating);
        self.form.input = input;

        let user = match validation::validate(&self.form.input) {
            Ok(user) => user,
            Err(errors) => {
                debug!("表单校验未通过: {:?}", errors);
                self.form.errors = errors.clone();
                self.transition(SubmissionState::Idle);
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.form.errors.clear();
        self.transition(SubmissionState::Submitting);

        let outcome = match self.api.create_user(&user).await {
            Ok(()) => {
                info!("✓ 用户创建成功: {} ({})", user.name, user.age);
                self.users.append(user.clone());
                SubmitOutcome::Created(user)
            }
            Err(e) => {
                error!("❌ 用户创建失败: {}", e);
                SubmitOutcome::Failed
            }
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    pub fn users(&self) -> &UserList {
        &self.users
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!("状态切换: {:?} → {:?}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::validation::{Field, ValidationError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// 内存实现：记录收到的请求，可配置失败
    #[derive(Clone, Default)]
    struct FakeApi {
        initial: Vec<UserRecord>,
        fail_fetch: bool,
        fail_create: bool,
        created: Arc<Mutex<Vec<UserRecord>>>,
    }

    #[async_trait]
    impl UserApi for FakeApi {
        async fn fetch_users(&self) -> AppResult<Vec<UserRecord>> {
            if self.fail_fetch {
                return Err(AppError::bad_response("api/user", 503));
            }
            Ok(self.initial.clone())
        }

        async fn create_user(&self, user: &UserRecord) -> AppResult<()> {
            self.created.lock().unwrap().push(user.clone());
            if self.fail_create {
                return Err(AppError::bad_response("api/createUser", 500));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_initial_list_replaces_users() {
        let api = FakeApi {
            initial: vec![UserRecord::new("Bob", 25)],
            ..FakeApi::default()
        };
        let mut controller = SubmissionController::new(api);

        assert!(controller.load_initial_list().await);
        assert_eq!(controller.users().as_slice(), &[UserRecord::new("Bob", 25)]);
    }

    #[tokio::test]
    async fn test_failed_initial_load_leaves_list_empty() {
        let api = FakeApi {
            fail_fetch: true,
            ..FakeApi::default()
        };
        let mut controller = SubmissionController::new(api);

        assert!(!controller.load_initial_list().await);
        assert!(controller.users().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_submission_makes_no_request() {
        let api = FakeApi::default();
        let created = api.created.clone();
        let mut controller = SubmissionController::new(api);

        let outcome = controller.submit(FormInput::new("", "20")).await;

        let expected = FieldErrors::from([(Field::Name, ValidationError::NameRequired)]);
        assert_eq!(outcome, SubmitOutcome::Invalid(expected.clone()));
        assert_eq!(controller.form().errors, expected);
        assert!(created.lock().unwrap().is_empty());
        assert!(controller.users().is_empty());
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_valid_submission_appends_once() {
        let api = FakeApi {
            initial: vec![UserRecord::new("Bob", 25)],
            ..FakeApi::default()
        };
        let created = api.created.clone();
        let mut controller = SubmissionController::new(api);
        controller.load_initial_list().await;

        let outcome = controller.submit(FormInput::new("Alice", "30")).await;

        assert_eq!(outcome, SubmitOutcome::Created(UserRecord::new("Alice", 30)));
        assert_eq!(*created.lock().unwrap(), vec![UserRecord::new("Alice", 30)]);
        assert_eq!(
            controller.users().as_slice(),
            &[UserRecord::new("Bob", 25), UserRecord::new("Alice", 30)]
        );
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_failed_submission_leaves_list_unchanged() {
        let api = FakeApi {
            fail_create: true,
            ..FakeApi::default()
        };
        let created = api.created.clone();
        let mut controller = SubmissionController::new(api);

        let outcome = controller.submit(FormInput::new("Alice", "30")).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(created.lock().unwrap().len(), 1);
        assert!(controller.users().is_empty());
        assert!(!controller.form().has_errors());
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_form_is_not_reset_and_errors_clear_on_success() {
        let mut controller = SubmissionController::new(FakeApi::default());

        controller.submit(FormInput::new("Alice", "abc")).await;
        assert!(controller.form().has_errors());

        controller.submit(FormInput::new("Alice", "30")).await;
        assert!(!controller.form().has_errors());
        assert_eq!(controller.form().input, FormInput::new("Alice", "30"));
    }
}
