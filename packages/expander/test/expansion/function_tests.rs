//! Function Expansion Tests
//!
//! Peers synthesized for named function declarations: signature
//! carriage, effect keywords, by-reference arguments, label handling,
//! and modifier rewriting.

use bypass_expander::syntax::ast::{
    Attribute, Decl, DeclModifiers, EffectSignature, FunctionDecl, Param,
};
use pretty_assertions::assert_eq;

#[path = "util.rs"]
mod util;
use util::{expand_source, marker};

#[test]
fn plain_method_forwards_by_name() {
    let decl = Decl::Function(
        FunctionDecl::new("greet", vec![])
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_attribute(marker()),
    );

    let expected = "\
#if DEBUG
func ___greet() {
  greet()
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn labels_and_wildcards_rebuild_the_argument_list() {
    let decl = Decl::Function(
        FunctionDecl::new(
            "greet",
            vec![
                Param::named("first", "f", "String"),
                Param::unlabeled("second", "() -> String").with_type_attribute("@escaping"),
            ],
        )
        .with_modifiers(DeclModifiers::PRIVATE),
    );

    let expected = "\
#if DEBUG
func ___greet(first f: String, _ second: @escaping () -> String) {
  greet(first: f, second)
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn default_values_are_carried_verbatim() {
    let decl = Decl::Function(
        FunctionDecl::new(
            "greet",
            vec![Param::named("to", "target", "String").with_default("\"World\"")],
        )
        .with_modifiers(DeclModifiers::PRIVATE)
        .with_return_type("String"),
    );

    let expected = "\
#if DEBUG
func ___greet(to target: String = \"World\") -> String {
  greet(to: target)
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn throwing_method_gets_try_at_the_call_site() {
    let decl = Decl::Function(
        FunctionDecl::new("greet", vec![])
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_effects(EffectSignature::throws()),
    );

    let expected = "\
#if DEBUG
func ___greet() throws {
  try greet()
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn suspending_method_gets_await_at_the_call_site() {
    let decl = Decl::Function(
        FunctionDecl::new("greet", vec![])
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_effects(EffectSignature::asynchronous()),
    );

    let expected = "\
#if DEBUG
func ___greet() async {
  await greet()
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn suspend_marker_precedes_fail_marker() {
    let decl = Decl::Function(
        FunctionDecl::new("greet", vec![])
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_effects(EffectSignature::async_throws()),
    );

    let expected = "\
#if DEBUG
func ___greet() async throws {
  try await greet()
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn static_methods_stay_type_level() {
    let decl = Decl::Function(
        FunctionDecl::new("greet", vec![])
            .with_modifiers(DeclModifiers::PRIVATE | DeclModifiers::STATIC),
    );

    let expected = "\
#if DEBUG
static func ___greet() {
  greet()
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn class_methods_collapse_to_static() {
    let decl = Decl::Function(
        FunctionDecl::new("max", vec![])
            .with_modifiers(DeclModifiers::PRIVATE | DeclModifiers::CLASS_LEVEL),
    );

    let expected = "\
#if DEBUG
static func ___max() {
  max()
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn mutating_passes_through() {
    let decl = Decl::Function(
        FunctionDecl::new("reset", vec![])
            .with_modifiers(DeclModifiers::PRIVATE | DeclModifiers::MUTATING),
    );

    let expected = "\
#if DEBUG
mutating func ___reset() {
  reset()
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn actor_affinity_attribute_is_copied() {
    let decl = Decl::Function(
        FunctionDecl::new("greet", vec![])
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_attribute(marker())
            .with_attribute(Attribute::new("MainActor")),
    );

    let expected = "\
#if DEBUG
@MainActor
func ___greet() {
  greet()
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn generics_and_where_clause_are_carried_verbatim() {
    let decl = Decl::Function(
        FunctionDecl::new("pick", vec![Param::labeled("from", "[T]")])
            .with_modifiers(DeclModifiers::PRIVATE)
            .with_generics("<T>")
            .with_return_type("T")
            .with_where_clause("where T: Equatable"),
    );

    let expected = "\
#if DEBUG
func ___pick<T>(from: [T]) -> T where T: Equatable {
  pick(from: from)
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}

#[test]
fn byref_parameters_forward_with_an_ampersand() {
    let decl = Decl::Function(
        FunctionDecl::new(
            "bump",
            vec![
                Param::labeled("count", "Int").byref(),
                Param::labeled("by", "Int"),
            ],
        )
        .with_modifiers(DeclModifiers::PRIVATE),
    );

    let expected = "\
#if DEBUG
func ___bump(count: inout Int, by: Int) {
  bump(count: &count, by: by)
}
#endif";
    assert_eq!(expand_source(&decl), expected);
}
