//! 会话值对象

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// 会话
///
/// `authenticated` 与 `last_authenticated_at` 总是作为一个值整体替换。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    authenticated: bool,
    last_authenticated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// 认证成功后的会话
    pub(crate) fn logged_in(at: DateTime<Utc>) -> Self {
        Self {
            authenticated: true,
            last_authenticated_at: Some(at),
        }
    }

    /// 登出后的会话，保留最近一次认证时间
    pub(crate) fn logged_out(self) -> Self {
        Self {
            authenticated: false,
            ..self
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn last_authenticated_at(&self) -> Option<DateTime<Utc>> {
        self.last_authenticated_at
    }

    pub fn state(&self) -> SessionState {
        if self.authenticated {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}
