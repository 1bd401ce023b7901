//! Library entrypoint for `jklex`.
//!
//! The crate exposes a Java/Kotlin lexer, a two-pass analyzer that reports
//! E1..E4 findings, and the text/JSON report renderers used by the binary.

pub mod analysis;
pub mod config;
pub mod interactive;
pub mod lexer;
pub mod report;
