//! 参与者目录
//!
//! 评论只保存 `ActorId`，目录负责把 ID 解析回参与者，并允许多个任务共享同一参与者。

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use remark_common::ActorId;
use remark_ports::Authenticator;

use super::actor::Actor;
use crate::error::DiscussionError;

type SharedActor = Arc<RwLock<Actor>>;

#[derive(Debug, Default)]
pub struct ActorDirectory {
    actors: RwLock<HashMap<ActorId, SharedActor>>,
}

impl ActorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, actor: Actor) -> ActorId {
        let id = actor.id();
        self.actors.write().insert(id, Arc::new(RwLock::new(actor)));
        id
    }

    /// 当前状态的快照
    ///
    /// 返回的是副本，之后通过目录的 `logout` / `login` 不会反映到副本上；
    /// 需要以当前会话状态修改评论时使用 `with_actor`。
    pub fn get(&self, id: ActorId) -> Option<Actor> {
        self.entry(id).ok().map(|actor| actor.read().clone())
    }

    pub fn name_of(&self, id: ActorId) -> Option<String> {
        self.entry(id).ok().map(|actor| actor.read().name().to_string())
    }

    /// 在读锁内访问参与者
    pub fn with_actor<R>(
        &self,
        id: ActorId,
        f: impl FnOnce(&Actor) -> R,
    ) -> Result<R, DiscussionError> {
        let actor = self.entry(id)?;
        let guard = actor.read();
        Ok(f(&*guard))
    }

    /// 登录
    ///
    /// 认证期间不持有锁；认证成功后在同一次写锁内写入会话，
    /// 并发登录不会让登录状态和时间戳不一致。
    pub async fn login<A>(
        &self,
        id: ActorId,
        authenticator: &A,
    ) -> Result<DateTime<Utc>, DiscussionError>
    where
        A: Authenticator + ?Sized,
    {
        let actor = self.entry(id)?;

        match authenticator.authenticate().await {
            Ok(()) => {
                let mut guard = actor.write();
                let at = Utc::now();
                guard.record_login(at);
                Ok(at)
            }
            Err(cause) => Err(actor.read().login_failed(cause)),
        }
    }

    pub fn logout(&self, id: ActorId) -> Result<(), DiscussionError> {
        self.entry(id)?.write().logout();
        Ok(())
    }

    pub fn set_name(&self, id: ActorId, name: impl Into<String>) -> Result<String, DiscussionError> {
        let actor = self.entry(id)?;
        let mut guard = actor.write();
        guard.set_name(name).map(str::to_string)
    }

    fn entry(&self, id: ActorId) -> Result<SharedActor, DiscussionError> {
        self.actors
            .read()
            .get(&id)
            .cloned()
            .ok_or(DiscussionError::ActorNotFound(id))
    }
}
