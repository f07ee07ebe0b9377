//! Mixtape command-line driver: indexing, building and listing compilations

pub mod commands;
pub mod config;
pub mod progress;
pub mod prompt;
