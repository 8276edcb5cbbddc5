//! Syntax Module
//!
//! The declaration tree the engine consumes and the span anchors it
//! reports against.

pub mod ast;
pub mod span;
