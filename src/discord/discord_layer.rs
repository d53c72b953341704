// Discord layer - commands and event handlers.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "ai/mod.rs"]
pub mod ai;

// Re-export the shared framework types for convenience
pub use commands::zoro::{Data, Error};
