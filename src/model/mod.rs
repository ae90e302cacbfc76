pub mod config;
pub mod cost;
pub mod report;
pub mod state;
