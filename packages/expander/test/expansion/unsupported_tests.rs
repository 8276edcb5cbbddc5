//! Unsupported Expansion Tests
//!
//! Sites the engine must reject: the error carries the fixed message,
//! the diagnostic anchors at the attribute span, and no peer is
//! produced.

use bypass_expander::syntax::ast::{Decl, OtherDecl, VariableDecl};
use bypass_expander::syntax::span::{SourceLocation, SourceSpan};
use bypass_expander::{expand, Attribute, DiagnosticLevel, ExpandError, ExpansionContext};
use pretty_assertions::assert_eq;

#[path = "util.rs"]
mod util;
use util::marker;

#[test]
fn type_declarations_are_rejected() {
    let decl = Decl::Other(OtherDecl::new("struct"));
    let mut ctx = ExpansionContext::new();

    let err = expand(&marker(), &decl, &mut ctx).unwrap_err();
    assert!(matches!(err, ExpandError::UnsupportedDeclarationKind { .. }));
    assert_eq!(
        err.to_string(),
        "'@BypassAccess' cannot be applied to this declaration"
    );
}

#[test]
fn subscripts_are_rejected_like_any_other_kind() {
    let decl = Decl::Other(OtherDecl::new("subscript"));
    let mut ctx = ExpansionContext::new();

    assert!(expand(&marker(), &decl, &mut ctx).is_err());
    assert_eq!(ctx.diagnostics().len(), 1);
}

#[test]
fn missing_type_annotation_produces_no_peer() {
    let decl = Decl::Variable(VariableDecl::immutable("name").with_initializer("\"x\""));
    let mut ctx = ExpansionContext::new();

    let err = expand(&marker(), &decl, &mut ctx).unwrap_err();
    assert!(matches!(err, ExpandError::MissingTypeAnnotation { .. }));
    assert_eq!(
        err.to_string(),
        "'@BypassAccess' requires an explicit type annotation"
    );
}

#[test]
fn diagnostics_anchor_at_the_attribute_site() {
    let span = SourceSpan::new(
        SourceLocation::new(42, 3, 1),
        SourceLocation::new(55, 3, 14),
    );
    let attribute = Attribute::new("BypassAccess").with_span(span);
    let decl = Decl::Other(OtherDecl::new("enum"));
    let mut ctx = ExpansionContext::new();

    let _ = expand(&attribute, &decl, &mut ctx);

    let diagnostic = &ctx.diagnostics()[0];
    assert_eq!(diagnostic.span, span);
    assert_eq!(diagnostic.level, DiagnosticLevel::Error);
}

#[test]
fn message_quotes_the_registered_attribute_name() {
    let decl = Decl::Other(OtherDecl::new("struct"));
    let mut ctx = ExpansionContext::new();

    let err = expand(&Attribute::new("Expose"), &decl, &mut ctx).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'@Expose' cannot be applied to this declaration"
    );
}

#[test]
fn a_failing_site_reports_exactly_once() {
    let decl = Decl::Other(OtherDecl::new("struct"));
    let mut ctx = ExpansionContext::new();

    let _ = expand(&marker(), &decl, &mut ctx);
    assert_eq!(ctx.diagnostics().len(), 1);
}

#[test]
fn diagnostics_serialize_for_the_host_boundary() {
    let decl = Decl::Other(OtherDecl::new("struct"));
    let mut ctx = ExpansionContext::new();
    let _ = expand(&marker(), &decl, &mut ctx);

    let json = serde_json::to_string(&ctx.diagnostics()[0]).unwrap();
    assert!(json.contains("cannot be applied to this declaration"));
}
