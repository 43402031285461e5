//! 参与者与会话

#![allow(clippy::module_inception)]

pub mod actor;
pub mod directory;
pub mod session;

pub use actor::Actor;
pub use directory::ActorDirectory;
pub use session::{Session, SessionState};
