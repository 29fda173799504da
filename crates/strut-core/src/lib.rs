//! Core types and configuration for strut.
//!
//! This crate provides the foundational data structures used across all strut
//! crates:
//! - [`config`] — Configuration loading from `.strut/strut.json`
//! - [`diagnostics`] — Spans, diagnostic records, suggested edits, and the
//!   [`DiagnosticSink`](diagnostics::DiagnosticSink) trait

pub mod config;
pub mod diagnostics;
