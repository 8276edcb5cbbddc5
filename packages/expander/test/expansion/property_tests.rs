//! Property Expansion Tests
//!
//! Peers synthesized for stored and computed variable declarations.

use bypass_expander::syntax::ast::{
    AccessorBlock, AccessorDecl, AccessorKind, Decl, DeclModifiers, EffectSignature, VariableDecl,
};
use pretty_assertions::assert_eq;

#[path = "util.rs"]
mod util;
use util::{expand_source, marker};

#[test]
fn stored_constant_becomes_read_only_peer() {
    let decl = Decl::Variable(
        VariableDecl::immutable("name")
            .with_type("String")
            .with_initializer("\"x\"")
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_attribute(marker()),
    );

    let expected = "\
#if DEBUG
var ___name: String {
  name
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn stored_variable_gets_both_accessors() {
    let decl = Decl::Variable(
        VariableDecl::mutable("name")
            .with_type("String")
            .with_initializer("\"x\"")
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_attribute(marker()),
    );

    let expected = "\
#if DEBUG
var ___name: String {
  get {
    name
  }
  set {
    name = newValue
  }
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn static_members_keep_type_level_dispatch() {
    let decl = Decl::Variable(
        VariableDecl::immutable("name")
            .with_type("String")
            .with_modifiers(DeclModifiers::PRIVATE | DeclModifiers::STATIC),
    );

    let expected = "\
#if DEBUG
static var ___name: String {
  name
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn computed_get_only_mirrors_the_accessor_set() {
    let decl = Decl::Variable(
        VariableDecl::mutable("name")
            .with_type("String")
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_accessors(AccessorBlock::GetterShorthand("\"x\"".into())),
    );

    let expected = "\
#if DEBUG
var ___name: String {
  get {
    name
  }
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn computed_getter_effects_reach_signature_and_body() {
    let decl = Decl::Variable(
        VariableDecl::mutable("token")
            .with_type("String")
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_accessors(AccessorBlock::Accessors(vec![AccessorDecl::new(
                AccessorKind::Get,
                "fetchToken()",
            )
            .with_effects(EffectSignature::async_throws())])),
    );

    let expected = "\
#if DEBUG
var ___token: String {
  get async throws {
    try await token
  }
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn computed_get_set_forwards_both_accessors() {
    let decl = Decl::Variable(
        VariableDecl::mutable("name")
            .with_type("String")
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_accessors(AccessorBlock::Accessors(vec![
                AccessorDecl::new(AccessorKind::Get, "\"x\""),
                AccessorDecl::new(AccessorKind::Set, "store(newValue)"),
            ])),
    );

    let expected = "\
#if DEBUG
var ___name: String {
  get {
    name
  }
  set {
    name = newValue
  }
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn fileprivate_visibility_is_stripped() {
    let decl = Decl::Variable(
        VariableDecl::immutable("name")
            .with_type("String")
            .with_modifiers(DeclModifiers::FILEPRIVATE),
    );

    let source = expand_source(&decl);
    assert!(!source.contains("fileprivate"));
    assert!(!source.contains("private"));
}
