//! # lca-cli
//!
//! Command-line front end for the Bio-SAC LCA report.
//!
//! - [`config`] - `lca-report.toml` loading
//! - [`render`] - static HTML output
//! - [`server`] - HTTP server, one render pass per request

pub mod config;
pub mod render;
pub mod server;

pub use config::ReportConfig;
pub use render::{RenderOutcome, write_report};
