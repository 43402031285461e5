//! ports - 抽象 trait 层
//!
//! 定义外部协作方的抽象接口

mod authenticator;

pub use authenticator::*;
