//! CLI commands

pub mod config;
pub mod models;
pub mod run;
