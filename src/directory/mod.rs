pub mod api;
pub mod client;
pub mod confirm;
pub mod error;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod fake;

pub use self::api::{HttpUserApi, UserApi};
pub use self::client::{Banner, Deletion, DirectoryClient, Saved};
pub use self::confirm::{Answer, Confirm};
pub use self::error::{DirectoryError, Failure, FormError};
pub use self::types::{Field, User, UserForm};
