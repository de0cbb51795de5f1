pub mod form;
pub mod user;

pub use form::{FormInput, FormState};
pub use user::{UserList, UserRecord};
