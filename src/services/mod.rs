pub mod errors;
pub mod member;
pub mod team;

pub use errors::{ServiceError, ServiceResult};
