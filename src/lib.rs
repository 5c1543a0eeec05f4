//! Nestmap - flatten nested-set trees into indented display rows
//!
//! This crate provides functionality for:
//! - Reconstructing depth from `left`/`right` boundaries in a single pass
//! - Decorating rows with caller-defined columns
//! - Rendering rows as text or JSON

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod mapper;

// Re-export commonly used types
pub use config::Config;
pub use error::{MapperError, Result};
pub use mapper::{flatten, DisplayRow, NodeKind, TreeNode};
