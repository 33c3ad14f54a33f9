//! Integration tests for realtime-query.

pub mod builder_test;
pub mod executor_test;
pub mod flow_test;
