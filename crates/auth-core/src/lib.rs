//! remark-auth-core - 认证核心库
//!
//! 角色授权表与模拟认证后端

mod authenticator;
mod role;

pub use authenticator::SimulatedAuthenticator;
pub use role::{DeleteScope, EditScope, Role, RoleGrants};

/// 权限检查宏
///
/// 条件不满足时返回 `Forbidden`
#[macro_export]
macro_rules! require_grant {
    ($allowed:expr, $action:expr) => {
        if !$allowed {
            return Err(remark_errors::AppError::forbidden(format!(
                "Missing grant: {}",
                $action
            ))
            .into());
        }
    };
}
