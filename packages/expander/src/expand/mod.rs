//! Expansion Module
//!
//! The single entry point the host invokes per annotated declaration:
//! classify the node, extract its facts, synthesize the forwarding peer,
//! and wrap it in the debug-only conditional block. Each invocation is a
//! pure function of one input node; there is no cache or registry, so
//! concurrent invocation across declarations needs no coordination.

pub mod classify;
pub mod diagnostics;
pub mod extract;
pub mod synthesize;

use crate::expand::classify::{classify, DeclShape};
use crate::expand::diagnostics::{Diagnostic, ExpandError};
use crate::expand::extract::{function_facts, initializer_facts, property_facts};
use crate::expand::synthesize::{
    synthesize_function, synthesize_initializer, synthesize_property, PeerDecl,
};
use crate::output::emit::emit_gated;
use crate::syntax::ast::{Attribute, Decl};

/// The conditional-compilation condition gating every peer.
pub const GATE_CONDITION: &str = "DEBUG";

/// A synthesized peer wrapped in its conditional-compilation gate. The
/// engine emits the gate opaquely; interpreting it is the host
/// preprocessor's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatedDecl {
    pub condition: String,
    pub decl: PeerDecl,
}

impl GatedDecl {
    pub fn debug_only(decl: PeerDecl) -> Self {
        GatedDecl {
            condition: GATE_CONDITION.to_string(),
            decl,
        }
    }
}

/// Per-invocation expansion context: collects the diagnostics the host
/// surfaces. Fresh per call; never shared across invocations.
#[derive(Debug, Default)]
pub struct ExpansionContext {
    diagnostics: Vec<Diagnostic>,
}

impl ExpansionContext {
    pub fn new() -> Self {
        ExpansionContext::default()
    }

    pub fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Expand one annotated declaration into its gated peer.
///
/// On success returns exactly one gated declaration. On failure records
/// an error-severity diagnostic anchored at the attribute site and
/// returns the error; the site contributes no output and other sites
/// are unaffected.
pub fn expand(
    attribute: &Attribute,
    decl: &Decl,
    ctx: &mut ExpansionContext,
) -> Result<Vec<GatedDecl>, ExpandError> {
    let result = expand_inner(attribute, decl);
    if let Err(error) = &result {
        ctx.diagnose(error.to_diagnostic());
    }
    result
}

fn expand_inner(attribute: &Attribute, decl: &Decl) -> Result<Vec<GatedDecl>, ExpandError> {
    let peer = match classify(decl, attribute)? {
        DeclShape::Property(variable) => {
            let facts = property_facts(variable, attribute)?;
            synthesize_property(&facts, attribute)
        }
        DeclShape::Function(function) => synthesize_function(&function_facts(function), attribute),
        DeclShape::Initializer(initializer) => {
            synthesize_initializer(&initializer_facts(initializer), attribute)
        }
    };
    Ok(vec![GatedDecl::debug_only(peer)])
}

/// Expand and render in one step: the peers as source text, separated
/// by blank lines. This is the surface the expansion tests assert on.
pub fn expand_to_source(
    attribute: &Attribute,
    decl: &Decl,
    ctx: &mut ExpansionContext,
) -> Result<String, ExpandError> {
    let peers = expand(attribute, decl, ctx)?;
    Ok(peers
        .iter()
        .map(emit_gated)
        .collect::<Vec<_>>()
        .join("\n\n"))
}
