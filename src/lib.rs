//! Bottom sheet - gesture-driven panel state machine
//!
//! This crate provides the core types and logic for a draggable bottom
//! panel, implementing the Elm Architecture pattern: messages in, model
//! updated, commands out. It has no UI framework dependency; a host renders
//! the panel and performs the returned commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod model;
pub mod replay;
pub mod sheet;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SheetConfig;
pub use messages::SheetMsg;
pub use model::SheetModel;
pub use sheet::{GestureSample, HeightConfig, PanelState};
