pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod jira;
pub mod nudge;
pub mod types;

pub use types::Result;
