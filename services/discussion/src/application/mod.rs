//! 应用层

pub mod moderation;

pub use moderation::ModerationService;
