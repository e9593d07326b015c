// ABOUTME: Library module for ai-engine-db-init
// ABOUTME: Exports all core functionality for use in binary and tests

pub mod commands;
pub mod postgres;
pub mod utils;
