//! src/utils.rs
//! Shared utility functions used across the codebase

use std::fmt::Display;

/// Extension trait for Result to simplify error conversion to String at the
/// MCP tool boundary. Instead of `.map_err(|e| e.to_string())?`, use
/// `.str_err()?`.
pub trait ResultExt<T, E> {
    /// Convert the error type to String.
    fn str_err(self) -> Result<T, String>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    fn str_err(self) -> Result<T, String> {
        self.map_err(|e| e.to_string())
    }
}
