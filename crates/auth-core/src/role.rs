//! 角色与授权表

use std::fmt;

use serde::{Deserialize, Serialize};

/// 编辑范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditScope {
    /// 只能编辑自己发表的评论
    OwnOnly,
    /// 可以编辑任何评论
    Any,
}

/// 删除范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteScope {
    Never,
    Any,
}

/// 角色授予的权限
///
/// 所有权限都以已登录为前提，由调用方检查会话状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrants {
    pub edit: EditScope,
    pub delete: DeleteScope,
}

const STANDARD_GRANTS: RoleGrants = RoleGrants {
    edit: EditScope::OwnOnly,
    delete: DeleteScope::Never,
};

const MODERATOR_GRANTS: RoleGrants = RoleGrants {
    edit: EditScope::Any,
    delete: DeleteScope::Never,
};

// Admin 沿用 Moderator 的编辑范围
const ADMIN_GRANTS: RoleGrants = RoleGrants {
    edit: MODERATOR_GRANTS.edit,
    delete: DeleteScope::Any,
};

/// 角色
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Standard,
    Moderator,
    Admin,
}

impl Role {
    /// 查询角色的授权表
    pub const fn grants(self) -> RoleGrants {
        match self {
            Role::Standard => STANDARD_GRANTS,
            Role::Moderator => MODERATOR_GRANTS,
            Role::Admin => ADMIN_GRANTS,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Role::Standard => "standard",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_table() {
        assert_eq!(Role::Standard.grants().edit, EditScope::OwnOnly);
        assert_eq!(Role::Standard.grants().delete, DeleteScope::Never);

        assert_eq!(Role::Moderator.grants().edit, EditScope::Any);
        assert_eq!(Role::Moderator.grants().delete, DeleteScope::Never);

        assert_eq!(Role::Admin.grants().edit, Role::Moderator.grants().edit);
        assert_eq!(Role::Admin.grants().delete, DeleteScope::Any);
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(Role::Standard.code(), "standard");
        assert_eq!(Role::Moderator.to_string(), "moderator");
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::default(), Role::Standard);
    }
}
