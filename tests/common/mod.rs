//! Common test utilities for mm CLI integration tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated starterpack checkout in a temp directory
//! - Fixtures: config and API response bodies

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
