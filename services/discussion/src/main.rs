//! Discussion - 演示入口
//!
//! 加载配置、初始化日志，然后走一遍发表、审核编辑、管理员删除的流程

use std::sync::Arc;

use anyhow::Context;
use discussion::{Actor, ActorDirectory, CommentThread, ModerationService, SimulatedAuthenticator};
use remark_config::AppConfig;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("config")?;

    if config.telemetry.json {
        remark_telemetry::init_tracing_json(&config.telemetry.log_level);
    } else {
        remark_telemetry::init_tracing(&config.telemetry.log_level);
    }
    let _metrics = if config.telemetry.metrics_enabled {
        Some(remark_telemetry::init_metrics()?)
    } else {
        None
    };

    info!(app = %config.app_name, env = %config.app_env, "Starting discussion demo");

    let authenticator = SimulatedAuthenticator::new(config.auth.latency());
    let actors = Arc::new(ActorDirectory::new());

    let author = actors.register(Actor::standard("User 1"));
    let moderator = actors.register(Actor::moderator("Moderator 1"));
    let admin = actors.register(Actor::admin("Admin 1"));
    for id in [author, moderator, admin] {
        actors.login(id, &authenticator).await?;
    }

    let mut thread = CommentThread::new();
    let root = actors.with_actor(author, |actor| thread.post(actor, "Hello world!"))?;
    let reply = actors.with_actor(moderator, |actor| {
        thread.reply(actor, root, "Please keep it civil.")
    })??;

    let moderation = ModerationService::new(actors.clone());
    let comment = thread.get_mut(&root).context("root comment missing")?;

    moderation.edit(moderator, comment, "Hello there!")?;
    if let Err(error) = moderation.delete(moderator, comment) {
        warn!(%error, client_error = error.is_client_error(), "Moderator delete refused");
    }
    moderation.delete(admin, comment)?;

    info!(
        comment_id = %comment.id(),
        message = comment.message().unwrap_or_default(),
        deleted = comment.is_deleted(),
        "Root comment final state"
    );

    let depth = thread.ancestors(&reply).count();
    info!(reply_id = %reply, depth, "Reply chain resolved");

    actors.logout(author)?;
    Ok(())
}
