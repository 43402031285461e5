//! 模拟认证后端

use std::time::Duration;

use async_trait::async_trait;
use remark_errors::AppResult;
use remark_ports::Authenticator;
use tracing::debug;

/// 默认模拟延迟
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// 固定延迟后总是成功的认证后端
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    latency: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self) -> AppResult<()> {
        tokio::time::sleep(self.latency).await;
        debug!(latency_ms = self.latency.as_millis() as u64, "Simulated credential check passed");
        Ok(())
    }
}
