//! Index module - Markdown artifacts derived from the parsed dump
//!
//! Provides:
//! - modules: per-module summary renderer
//! - functions: flat function list renderer
//! - generate: the indexer operation (load, parse, render, write)

pub mod functions;
pub mod generate;
pub mod modules;
