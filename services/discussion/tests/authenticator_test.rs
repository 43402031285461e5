//! 认证后端集成测试
//!
//! 使用 mockall 控制认证结果，以及目录上的并发登录

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use discussion::{Actor, ActorDirectory, DiscussionError, SessionState, SimulatedAuthenticator};
use mockall::mock;
use remark_errors::{AppError, AppResult};
use remark_ports::Authenticator;

mock! {
    pub Backend {}

    #[async_trait]
    impl Authenticator for Backend {
        async fn authenticate(&self) -> AppResult<()>;
    }
}

fn failing_backend() -> MockBackend {
    let mut backend = MockBackend::new();
    backend
        .expect_authenticate()
        .times(1)
        .returning(|| Err(AppError::external_service("Request hit the wall!")));
    backend
}

/// 认证失败时返回 AuthenticationFailed，会话不变
#[tokio::test]
async fn test_failed_login_leaves_state() {
    let mut actor = Actor::standard("User 1");

    let result = actor.login(&failing_backend()).await;

    match result {
        Err(DiscussionError::AuthenticationFailed(cause)) => {
            assert!(cause.to_string().contains("Request hit the wall!"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!actor.is_logged_in());
    assert!(actor.last_authenticated_at().is_none());
}

/// 会话只能经由成功的 login 进入 LoggedIn
#[tokio::test]
async fn test_logged_in_only_through_login() {
    for mut actor in [
        Actor::standard("User 1"),
        Actor::moderator("Moderator 1"),
        Actor::admin("Admin 1"),
    ] {
        assert_eq!(actor.session().state(), SessionState::LoggedOut);

        actor.logout();
        assert_eq!(actor.session().state(), SessionState::LoggedOut);

        assert!(actor.login(&failing_backend()).await.is_err());
        assert_eq!(actor.session().state(), SessionState::LoggedOut);

        actor
            .login(&SimulatedAuthenticator::new(Duration::ZERO))
            .await
            .unwrap();
        assert_eq!(actor.session().state(), SessionState::LoggedIn);
    }
}

/// 已登录时重新认证失败，原会话保留
#[tokio::test]
async fn test_failed_relogin_keeps_previous_session() {
    let mut actor = Actor::moderator("Moderator 1");
    actor
        .login(&SimulatedAuthenticator::new(Duration::ZERO))
        .await
        .unwrap();
    let session = actor.session();

    assert!(actor.login(&failing_backend()).await.is_err());

    assert_eq!(actor.session(), session);
    assert!(actor.is_logged_in());
}

/// 成功的 mock 后端
#[tokio::test]
async fn test_mocked_success() {
    let mut backend = MockBackend::new();
    backend.expect_authenticate().times(2).returning(|| Ok(()));
    let mut actor = Actor::admin("Admin 1");

    actor.login(&backend).await.unwrap();
    actor.logout();
    actor.login(&backend).await.unwrap();

    assert!(actor.is_logged_in());
}

/// 通过目录登录失败
#[tokio::test]
async fn test_directory_login_failure() {
    let directory = ActorDirectory::new();
    let id = directory.register(Actor::standard("User 1"));

    let result = directory.login(id, &failing_backend()).await;

    assert!(matches!(result, Err(DiscussionError::AuthenticationFailed(_))));
    assert!(!directory.get(id).unwrap().is_logged_in());
}

/// 模拟后端的固定延迟
#[tokio::test(start_paused = true)]
async fn test_simulated_latency() {
    let mut actor = Actor::standard("User 1");
    let start = tokio::time::Instant::now();

    actor
        .login(&SimulatedAuthenticator::new(Duration::from_millis(100)))
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(100));
    assert!(actor.is_logged_in());
}

/// 同一参与者并发登录，会话字段保持一致
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_are_consistent() {
    let directory = Arc::new(ActorDirectory::new());
    let id = directory.register(Actor::standard("User 1"));
    let authenticator = Arc::new(SimulatedAuthenticator::new(Duration::from_millis(5)));

    let logins = (0..16).map(|_| {
        let directory = directory.clone();
        let authenticator = authenticator.clone();
        tokio::spawn(async move { directory.login(id, &authenticator).await })
    });
    let stamps: Vec<_> = futures::future::join_all(logins)
        .await
        .into_iter()
        .map(|joined| joined.expect("task completes").expect("login succeeds"))
        .collect();

    let actor = directory.get(id).unwrap();
    assert!(actor.is_logged_in());
    let last = actor.last_authenticated_at().unwrap();
    assert!(stamps.contains(&last));
    assert!(stamps.iter().all(|stamp| *stamp <= last));
}

/// 并发登录与登出交错后，时间戳始终伴随一次成功认证
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_login_logout_interleaving() {
    let directory = Arc::new(ActorDirectory::new());
    let id = directory.register(Actor::admin("Admin 1"));
    let authenticator = Arc::new(SimulatedAuthenticator::new(Duration::from_millis(1)));

    let tasks = (0..8).map(|i| {
        let directory = directory.clone();
        let authenticator = authenticator.clone();
        tokio::spawn(async move {
            if i % 2 == 0 {
                directory.login(id, &authenticator).await.map(|_| ())
            } else {
                directory.logout(id)
            }
        })
    });
    for joined in futures::future::join_all(tasks).await {
        joined.expect("task completes").expect("operation succeeds");
    }

    let session = directory.get(id).unwrap().session();
    assert!(session.last_authenticated_at().is_some());
}
