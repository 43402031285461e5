//! 审核服务
//!
//! 实体的 `set_message` / `delete_comment` 只检查登录状态。
//! 本服务在调用实体方法之前先检查 `can_edit` / `can_delete`，
//! 拒绝时评论保持不变。

use std::sync::Arc;

use metrics::counter;
use remark_auth_core::require_grant;
use remark_common::ActorId;
use remark_errors::AppResult;
use tracing::{info, warn};

use crate::domain::actor::{Actor, ActorDirectory};
use crate::domain::comment::Comment;

/// 审核服务
pub struct ModerationService {
    actors: Arc<ActorDirectory>,
}

impl ModerationService {
    pub fn new(actors: Arc<ActorDirectory>) -> Self {
        Self { actors }
    }

    /// 以 `actor_id` 的身份编辑评论
    pub fn edit(
        &self,
        actor_id: ActorId,
        comment: &mut Comment,
        message: impl Into<String>,
    ) -> AppResult<()> {
        self.actors
            .with_actor(actor_id, |actor| Self::edit_as(actor, comment, message.into()))?
    }

    /// 以 `actor_id` 的身份删除评论
    pub fn delete(&self, actor_id: ActorId, comment: &mut Comment) -> AppResult<()> {
        self.actors
            .with_actor(actor_id, |actor| Self::delete_as(actor, comment))?
    }

    fn edit_as(actor: &Actor, comment: &mut Comment, message: String) -> AppResult<()> {
        let allowed = actor.can_edit(comment);
        record_decision(actor, comment, "edit", allowed);
        require_grant!(allowed, "comment:edit");

        comment.set_message(message, actor)?;
        info!(comment_id = %comment.id(), actor_id = %actor.id(), "Comment edited");
        Ok(())
    }

    fn delete_as(actor: &Actor, comment: &mut Comment) -> AppResult<()> {
        let allowed = actor.can_delete(comment);
        record_decision(actor, comment, "delete", allowed);
        require_grant!(allowed, "comment:delete");

        comment.delete_comment(actor)?;
        info!(comment_id = %comment.id(), actor_id = %actor.id(), "Comment deleted");
        Ok(())
    }
}

fn record_decision(actor: &Actor, comment: &Comment, action: &'static str, allowed: bool) {
    counter!(
        "authorization_decisions_total",
        "action" => action,
        "role" => actor.role().code(),
        "allowed" => allowed.to_string()
    )
    .increment(1);

    if !allowed {
        warn!(
            comment_id = %comment.id(),
            actor_id = %actor.id(),
            role = %actor.role(),
            action,
            "Authorization denied"
        );
    }
}
