//! Structured logging for RelayForge.
//!
//! Console output for operators plus daily-rotated NDJSON files.

pub mod logger;

pub use logger::init_logger;
