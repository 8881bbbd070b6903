// src/lib.rs
// Linesmith - line-addressable file editing, search, and listing over MCP

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod files;
pub mod mcp;
pub mod traverse;
pub mod utils;

pub use error::{LinesmithError, Result};
