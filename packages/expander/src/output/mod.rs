//! Output Module
//!
//! Rendering of synthesized declarations to source text.

pub mod emit;
