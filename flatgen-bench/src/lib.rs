//! # flatgen Bench
//!
//! Benchmarking utilities for flatgen code generation.

pub mod fixtures;
