//! Test Module
//!
//! Cross-module test suite for the docsplain engine.
//!
//! ## Test Categories
//! - `brain_tests`: Domain detection, complexity scoring, key terms, topics, fragments
//! - `synth_tests`: Template filling and artifact invariants
//! - `dispatch_tests`: Short-circuit rules and the full pipeline
//! - `session_tests`: Session actor concurrency, clearing and timeouts
//! - `intake_tests`: Upload validation and decoding
//! - `export_tests`: Markdown, HTML, share and JSON output
//! - `config_tests`: Environment-driven configuration

mod support;

pub mod config_tests;
pub mod synth_tests;
