//! Front-end contract for strut.
//!
//! strut does not parse or type-check source text. A language front-end does
//! that and hands the engine a [`snapshot::ProgramSnapshot`]: compilation
//! units as a small resolved AST ([`ast`]) plus a fact-backed type table
//! ([`types`]). This crate defines that interface and nothing else; the
//! checks in `strut-checks` consume it through the [`types::TypeOracle`]
//! trait.

pub mod ast;
pub mod snapshot;
pub mod types;
