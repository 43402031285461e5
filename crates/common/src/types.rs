//! 通用类型定义

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::new_id;

/// 参与者 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// 评论 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

/// 审计信息
///
/// `created_at` 在构造后不再变化，`update` 只刷新 `updated_*`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditInfo {
    created_at: DateTime<Utc>,
    created_by: Option<ActorId>,
    updated_at: DateTime<Utc>,
    updated_by: Option<ActorId>,
}

impl AuditInfo {
    pub fn new(actor_id: Option<ActorId>) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            created_by: actor_id,
            updated_at: now,
            updated_by: actor_id,
        }
    }

    pub fn update(&mut self, actor_id: Option<ActorId>) {
        self.updated_at = Utc::now();
        self.updated_by = actor_id;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_by(&self) -> Option<ActorId> {
        self.created_by
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn updated_by(&self) -> Option<ActorId> {
        self.updated_by
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::new(None)
    }
}
