//! Parser module — classifier, outline scanner and global collector.

pub mod classify;
pub mod globals;
pub mod outline;
