//! realtime-query - Build, run and save GraphQL queries against real-time
//! analytics APIs.
//!
//! This library exposes the core modules for use by the `rtq` binary and
//! integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod product;
pub mod query;
