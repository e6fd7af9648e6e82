//! CLI library components for GAVEL.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
