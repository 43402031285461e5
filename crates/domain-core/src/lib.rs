//! domain-core - 跨模块共享的领域核心 trait

mod entity;

pub use entity::*;

// Re-export common types
pub use remark_common::{ActorId, AuditInfo, CommentId};
