//! Logging and observability
//!
//! This module provides the append-only draw history.

pub mod jsonl;

pub use jsonl::{DrawLog, DrawRecord};
