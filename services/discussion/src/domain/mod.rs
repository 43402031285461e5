//! 领域层

pub mod actor;
pub mod comment;
