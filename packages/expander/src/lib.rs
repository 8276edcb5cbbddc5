#![deny(clippy::all)]

//! # bypass-expander
//!
//! A macro-expansion engine that synthesizes debug-only peer
//! declarations for privacy-restricted members. Given one parsed
//! declaration — a stored or computed property, a function, or an
//! initializer — the engine emits a higher-visibility forwarding peer
//! under a fixed rename prefix (`___name`, `___init` for constructors),
//! gated behind a debug-build conditional-compilation block.
//!
//! The pipeline per invocation is strictly linear:
//!
//!   Decl ──► classify ──► extract facts ──► synthesize peer ──► gate
//!
//! with diagnostics as the alternate terminal path when the shape is
//! unsupported or a required fact is missing. Every invocation is a
//! pure function of its input node; there is no cross-invocation state.
//!
//! USAGE:
//!
//! ```
//! use bypass_expander::syntax::ast::{Decl, FunctionDecl};
//! use bypass_expander::{expand_to_source, Attribute, ExpansionContext};
//!
//! let attribute = Attribute::new("BypassAccess");
//! let decl = Decl::Function(FunctionDecl::new("greet", vec![]));
//! let mut ctx = ExpansionContext::new();
//! let source = expand_to_source(&attribute, &decl, &mut ctx).unwrap();
//! assert!(source.contains("func ___greet()"));
//! ```

pub mod expand;
pub mod output;
pub mod syntax;

pub use expand::diagnostics::{Diagnostic, DiagnosticLevel, ExpandError};
pub use expand::{expand, expand_to_source, ExpansionContext, GatedDecl};
pub use syntax::ast::{Attribute, Decl, EffectSignature};
