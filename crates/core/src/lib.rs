//! Core types and configuration for the etfrisk workspace.
//!
//! This crate provides shared types used across all other crates:
//! - Price observations and derived series samples
//! - Window specification and annualization constants
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::RiskConfig;
pub use error::{Error, MetricFamily, Result};
pub use types::*;
