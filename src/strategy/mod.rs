//! Parsing Strategy Module
//!
//! - Single document: `crate::parse` / `Parser`
//! - Batch: parse many independent buffers on the rayon pool

pub mod parallel;

pub use parallel::{parse_parallel, parse_parallel_with_options};
