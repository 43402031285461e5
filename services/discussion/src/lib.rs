//! Discussion Service Library
//!
//! 评论功能的访问控制核心：
//! - `domain::actor`: 参与者、会话、参与者目录
//! - `domain::comment`: 评论实体与回复链
//! - `application`: 先授权再修改的审核流程

pub mod application;
pub mod domain;
pub mod error;

pub use application::ModerationService;
pub use domain::actor::{Actor, ActorDirectory, Session, SessionState};
pub use domain::comment::{Comment, CommentThread};
pub use error::{DiscussionError, MessageRejection, NameRejection};
pub use remark_auth_core::{Role, SimulatedAuthenticator};
