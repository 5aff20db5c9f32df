//! Core application functionality
//!
//! This module contains the application shell, including:
//! - Application initialization and configuration
//! - CLI and settings handling
//! - Error handling and logging
//! - Pointer and coordinate management

pub mod app;
pub mod cli;
pub mod errors;
pub mod logger;
pub mod pointer;
pub mod settings;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use pointer::{PointerInfo, PointerPlugin};
