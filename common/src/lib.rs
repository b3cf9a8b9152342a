//! Shared utilities for doris-migrate components
//!
//! This crate provides the ambient pieces every binary in the workspace uses:
//! - Structured logging initialization
//! - Fixed-interval readiness polling

pub mod logging;
pub mod wait;

pub use logging::init_logging;
pub use wait::{wait_until_ready, WaitError};
