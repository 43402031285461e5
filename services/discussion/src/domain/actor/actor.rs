//! 参与者实体

use chrono::{DateTime, Utc};
use metrics::counter;
use remark_auth_core::{DeleteScope, EditScope, Role};
use remark_common::ActorId;
use remark_domain_core::Entity;
use remark_errors::AppError;
use remark_ports::Authenticator;
use serde::Serialize;
use tracing::{info, warn};

use super::session::Session;
use crate::domain::comment::Comment;
use crate::error::{DiscussionError, NameRejection};

/// 参与者实体
///
/// 普通用户、版主、管理员共用同一类型，权限差异由 `role` 决定。
/// 只能序列化：会话只能经由 `login` 进入已登录状态。
#[derive(Debug, Clone, Serialize)]
pub struct Actor {
    id: ActorId,
    name: String,
    role: Role,
    session: Session,
}

impl Actor {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            role,
            session: Session::default(),
        }
    }

    pub fn standard(name: impl Into<String>) -> Self {
        Self::new(name, Role::Standard)
    }

    pub fn moderator(name: impl Into<String>) -> Self {
        Self::new(name, Role::Moderator)
    }

    pub fn admin(name: impl Into<String>) -> Self {
        Self::new(name, Role::Admin)
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn last_authenticated_at(&self) -> Option<DateTime<Utc>> {
        self.session.last_authenticated_at()
    }

    /// 登录
    ///
    /// 认证失败时会话保持不变。已登录时再次调用会重新认证并刷新时间。
    pub async fn login<A>(&mut self, authenticator: &A) -> Result<DateTime<Utc>, DiscussionError>
    where
        A: Authenticator + ?Sized,
    {
        match authenticator.authenticate().await {
            Ok(()) => {
                let at = Utc::now();
                self.record_login(at);
                Ok(at)
            }
            Err(cause) => Err(self.login_failed(cause)),
        }
    }

    pub(crate) fn record_login(&mut self, at: DateTime<Utc>) {
        self.session = Session::logged_in(at);
        counter!("actor_logins_total", "outcome" => "success").increment(1);
        info!(actor_id = %self.id, role = %self.role, "Actor logged in");
    }

    pub(crate) fn login_failed(&self, cause: AppError) -> DiscussionError {
        counter!("actor_logins_total", "outcome" => "failure").increment(1);
        warn!(actor_id = %self.id, error = %cause, "Actor login failed");
        DiscussionError::AuthenticationFailed(cause)
    }

    /// 登出（幂等）
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            info!(actor_id = %self.id, "Actor logged out");
        }
        self.session = self.session.logged_out();
    }

    /// 修改显示名称
    ///
    /// 被拒绝时名称保持不变。
    pub fn set_name(&mut self, new_name: impl Into<String>) -> Result<&str, DiscussionError> {
        let new_name = new_name.into();

        let rejection = if !self.is_logged_in() {
            Some(NameRejection::NotAuthenticated)
        } else if new_name.is_empty() {
            Some(NameRejection::EmptyName)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            let error = DiscussionError::InvalidNameChange(rejection);
            counter!("actor_name_changes_rejected_total", "reason" => error.reason()).increment(1);
            warn!(actor_id = %self.id, %error, "Name change rejected");
            return Err(error);
        }

        self.name = new_name;
        Ok(&self.name)
    }

    /// 是否为评论作者（按身份比较，不按名称）
    pub fn is_author_of(&self, comment: &Comment) -> bool {
        comment.author() == self.id
    }

    /// 能否编辑评论
    pub fn can_edit(&self, comment: &Comment) -> bool {
        if !self.is_logged_in() {
            return false;
        }
        match self.role.grants().edit {
            EditScope::OwnOnly => self.is_author_of(comment),
            EditScope::Any => true,
        }
    }

    /// 能否删除评论
    pub fn can_delete(&self, _comment: &Comment) -> bool {
        if !self.is_logged_in() {
            return false;
        }
        match self.role.grants().delete {
            DeleteScope::Never => false,
            DeleteScope::Any => true,
        }
    }
}

impl Entity for Actor {
    type Id = ActorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// ============================================================
// 单元测试
// ============================================================
