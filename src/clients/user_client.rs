//! 用户 API 客户端
//!
//! 封装所有与远端用户 API 相关的调用逻辑
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::UserRecord;
use async_trait::async_trait;
use std::time::Duration;
use serde_json::Value;
use tracing::{debug, warn};

/// 读取全部用户
pub const LIST_USERS_PATH: &str = "api/user";
/// 创建用户
pub const CREATE_USER_PATH: &str = "api/createUser";

/// 远端用户 API 的能力
///
/// 提交控制器只依赖这个 trait，测试时可以换成内存实现
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET {base}/api/user`
    async fn fetch_users(&self) -> AppResult<Vec<UserRecord>>;

    /// `POST {base}/api/createUser`，只关心成功与否
    async fn create_user(&self, user: &UserRecord) -> AppResult<()>;
}

/// 基于 reqwest 的 HTTP 实现
pub struct UserClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserClient {
    /// 创建新的用户 API 客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// 拼接完整地址，容忍基础地址末尾的 `/`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl UserApi for UserClient {
    async fn fetch_users(&self) -> AppResult<Vec<UserRecord>> {
        let url = self.endpoint_url(LIST_USERS_PATH);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(LIST_USERS_PATH, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::bad_response(LIST_USERS_PATH, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::api_request_failed(LIST_USERS_PATH, e))?;
        let users = parse_user_list(&body)?;

        debug!("获取到 {} 个用户", users.len());
        Ok(users)
    }

    async fn create_user(&self, user: &UserRecord) -> AppResult<()> {
        let url = self.endpoint_url(CREATE_USER_PATH);
        debug!("POST {} Payload: {:?}", url, user);

        let response = self
            .http
            .post(&url)
            .json(user)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(CREATE_USER_PATH, e))?;

        let status = response.status();
        debug!("创建用户结果: {}", status);

        if !status.is_success() {
            return Err(AppError::bad_response(CREATE_USER_PATH, status.as_u16()));
        }

        Ok(())
    }
}

/// 解析用户列表响应
///
/// 响应体必须是 JSON 数组；单条记录格式不对时跳过并告警，其余记录照常展示
pub fn parse_user_list(body: &[u8]) -> AppResult<Vec<UserRecord>> {
    let entries: Vec<Value> = serde_json::from_slice(body)?;
    let total = entries.len();

    let users: Vec<UserRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<UserRecord>(entry.clone()) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("⚠️ 跳过第 {} 条用户记录 {}: {}", index + 1, entry, e);
                    None
                }
            }
        })
        .collect();

    if users.len() < total {
        warn!("⚠️ 用户列表共 {} 条，有效 {} 条", total, users.len());
    }

    Ok(users)
}
