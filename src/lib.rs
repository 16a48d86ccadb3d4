// Public API - config in, summary out
pub mod config;
pub mod runner;
pub mod summary;

// Internal modules
mod report;
mod telemetry;
