//! Configuration module for CashIO
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashioPaths;
pub use settings::Settings;
