//! Shared building blocks for the pococard workspace: errors,
//! configuration, and constants.

pub mod config;
pub mod constants;
pub mod error;
