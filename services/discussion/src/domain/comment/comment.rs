//! 评论实体

use chrono::{DateTime, Utc};
use metrics::counter;
use remark_common::{ActorId, AuditInfo, CommentId};
use remark_domain_core::{AggregateRoot, Entity};
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::actor::Actor;
use crate::error::{DiscussionError, MessageRejection};

/// 评论实体
///
/// 作者以 `ActorId` 引用，评论不持有参与者。
/// 删除只打标记，不会物理移除。
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    id: CommentId,
    author: ActorId,
    message: Option<String>,
    replied_to: Option<CommentId>,
    deleted: bool,
    audit_info: AuditInfo,
}

impl Comment {
    /// 创建评论
    ///
    /// 构造本身不会失败；作者未登录时评论没有内容。
    pub fn new(author: &Actor, message: impl Into<String>, replied_to: Option<&Comment>) -> Self {
        let mut comment = Self {
            id: CommentId::new(),
            author: author.id(),
            message: None,
            replied_to: replied_to.map(|parent| parent.id),
            deleted: false,
            audit_info: AuditInfo::new(Some(author.id())),
        };

        if let Err(error) = comment.set_message(message, author) {
            debug!(comment_id = %comment.id, %error, "Comment created without content");
        }

        comment
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn author(&self) -> ActorId {
        self.author
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// 被回复的评论，不做链式遍历
    pub fn replied_to(&self) -> Option<CommentId> {
        self.replied_to
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.audit_info.created_at()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// 最近一次成功修改的参与者
    pub fn last_modified_by(&self) -> Option<ActorId> {
        self.audit_info.updated_by()
    }

    /// 修改内容
    ///
    /// 只检查 `responsible` 是否已登录，不检查 `can_edit`；
    /// 是否有权调用由调用方负责。
    pub fn set_message(
        &mut self,
        new_message: impl Into<String>,
        responsible: &Actor,
    ) -> Result<&str, DiscussionError> {
        let new_message = new_message.into();

        if !responsible.is_logged_in() {
            return Err(self.reject(
                DiscussionError::InvalidMessageEdit(MessageRejection::NotAuthenticated),
                responsible,
            ));
        }
        if new_message.is_empty() {
            return Err(self.reject(
                DiscussionError::InvalidMessageEdit(MessageRejection::EmptyMessage),
                responsible,
            ));
        }

        self.audit_info.update(Some(responsible.id()));
        Ok(self.message.insert(new_message).as_str())
    }

    /// 标记删除
    ///
    /// 与 `set_message` 相同，只检查登录状态，`can_delete` 由调用方负责。
    pub fn delete_comment(&mut self, responsible: &Actor) -> Result<(), DiscussionError> {
        if !responsible.is_logged_in() {
            return Err(self.reject(DiscussionError::UnauthorizedDeletion, responsible));
        }

        self.deleted = true;
        self.audit_info.update(Some(responsible.id()));
        Ok(())
    }

    fn reject(&self, error: DiscussionError, responsible: &Actor) -> DiscussionError {
        counter!("comment_mutations_rejected_total", "reason" => error.reason()).increment(1);
        warn!(
            comment_id = %self.id,
            actor_id = %responsible.id(),
            %error,
            "Comment mutation rejected"
        );
        error
    }
}

impl Entity for Comment {
    type Id = CommentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Comment {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }
}

// ============================================================
// 单元测试
// ============================================================
