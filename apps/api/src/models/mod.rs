pub mod chat;
pub mod quiz;
pub mod resume;
pub mod user;
