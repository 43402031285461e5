//! 服务错误定义

use remark_common::{ActorId, CommentId};
use remark_errors::AppError;
use thiserror::Error;

/// 改名被拒绝的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameRejection {
    #[error("actor needs to be logged in to change their name")]
    NotAuthenticated,
    #[error("name cannot be empty")]
    EmptyName,
}

/// 评论内容修改被拒绝的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MessageRejection {
    #[error("responsible actor is not logged in")]
    NotAuthenticated,
    #[error("message cannot be empty")]
    EmptyMessage,
}

#[derive(Debug, Error)]
pub enum DiscussionError {
    #[error("Failed to log in: {0}")]
    AuthenticationFailed(#[source] AppError),

    #[error("Invalid name change: {0}")]
    InvalidNameChange(NameRejection),

    #[error("Invalid message edit: {0}")]
    InvalidMessageEdit(MessageRejection),

    #[error("Unauthorized deletion: responsible actor is not logged in")]
    UnauthorizedDeletion,

    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),
}

impl DiscussionError {
    /// 指标标签
    pub fn reason(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed(_) => "authentication_failed",
            Self::InvalidNameChange(NameRejection::NotAuthenticated)
            | Self::InvalidMessageEdit(MessageRejection::NotAuthenticated) => "not_authenticated",
            Self::InvalidNameChange(NameRejection::EmptyName) => "empty_name",
            Self::InvalidMessageEdit(MessageRejection::EmptyMessage) => "empty_message",
            Self::UnauthorizedDeletion => "unauthorized_deletion",
            Self::ActorNotFound(_) => "actor_not_found",
            Self::CommentNotFound(_) => "comment_not_found",
        }
    }
}

impl From<DiscussionError> for AppError {
    fn from(error: DiscussionError) -> Self {
        match error {
            DiscussionError::AuthenticationFailed(_)
            | DiscussionError::UnauthorizedDeletion
            | DiscussionError::InvalidNameChange(NameRejection::NotAuthenticated)
            | DiscussionError::InvalidMessageEdit(MessageRejection::NotAuthenticated) => {
                AppError::unauthenticated(error.to_string())
            }
            DiscussionError::InvalidNameChange(NameRejection::EmptyName)
            | DiscussionError::InvalidMessageEdit(MessageRejection::EmptyMessage) => {
                AppError::validation(error.to_string())
            }
            DiscussionError::ActorNotFound(_) | DiscussionError::CommentNotFound(_) => {
                AppError::not_found(error.to_string())
            }
        }
    }
}
