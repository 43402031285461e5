//! 评论与回复链

#![allow(clippy::module_inception)]

pub mod comment;
pub mod thread;

pub use comment::Comment;
pub use thread::{Ancestors, CommentThread};
