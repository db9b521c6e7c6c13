pub mod extractors;
pub mod handlers;
pub mod password;
pub mod repository;
pub mod session;

pub use extractors::{AdminUser, AuthUser};
