//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The module map model (functions/fields per module)
//! - The dump line classifier
//! - Dump file loading with best-effort UTF-8 decoding
//! - The fixed dump/index paths

pub mod dump;
pub mod model;
pub mod parse;
pub mod paths;
