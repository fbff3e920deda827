//! # mutabuf Bench
//!
//! Benchmarking utilities for mutabuf performance testing.

pub mod timing;
pub mod workload;
