//! Shared types, errors, and configuration for Ratehub.
//!
//! This crate provides common pieces used across the other crates:
//! - Application-wide error types with HTTP status mappings
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
