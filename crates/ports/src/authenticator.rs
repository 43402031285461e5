//! 认证后端 trait

use std::sync::Arc;

use async_trait::async_trait;
use remark_errors::AppResult;

/// 认证后端
///
/// 只有两种结果：成功，或携带原因的失败。
/// 真实的凭证校验可以替换模拟实现而无需改动调用方。
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// 执行一次凭证校验
    async fn authenticate(&self) -> AppResult<()>;
}

#[async_trait]
impl<T: Authenticator + ?Sized> Authenticator for Arc<T> {
    async fn authenticate(&self) -> AppResult<()> {
        (**self).authenticate().await
    }
}
