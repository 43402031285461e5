//! 实体基础 trait

use remark_common::AuditInfo;

/// 实体 trait
pub trait Entity {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// 聚合根 trait
///
/// 审计信息只读，由聚合根自己的修改方法刷新。
pub trait AggregateRoot: Entity {
    fn audit_info(&self) -> &AuditInfo;
}
