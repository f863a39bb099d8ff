pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

/// Set by build.rs; lets a running server be matched to its binary.
pub const BUILD_ID: &str = env!("CLUBHOUSE_BUILD_ID");
