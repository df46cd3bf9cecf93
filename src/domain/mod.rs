//! Domain aggregates exposed by the repository and service layers.

pub mod member;
pub mod search;
pub mod team;
pub mod types;
