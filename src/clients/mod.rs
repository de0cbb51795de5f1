pub mod user_client;

pub use user_client::{UserApi, UserClient, CREATE_USER_PATH, LIST_USERS_PATH};
