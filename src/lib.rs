//! apidex - index generation and context search for flat API surface dumps
//!
//! apidex provides:
//! - A line classifier that parses a text dump of an API surface into a
//!   module map (functions and fields per module)
//! - Markdown renderers for a per-module summary and a flat function list
//! - A case-insensitive substring search over the raw dump with windowed
//!   context output

pub mod core;
pub mod index;
pub mod search;
