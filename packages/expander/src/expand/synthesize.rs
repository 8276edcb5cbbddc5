//! Forwarding-Declaration Synthesizer
//!
//! Builds the peer declaration from extracted facts: one structured
//! builder per synthesized node kind, assembling typed output nodes
//! rather than interpolating source fragments. Synthesis is total over
//! well-formed facts; every fallible check lives upstream in the
//! classifier and extractor.

use crate::expand::extract::{FunctionFacts, InitFacts, PropertyFacts, PropertyMutability};
use crate::syntax::ast::{
    Attribute, DeclModifiers, EffectSignature, Failability, Param, ParamLabel,
};

/// Fixed prefix applied to original names to derive peer names.
pub const RENAME_PREFIX: &str = "___";

/// Peer name synthesized for initializers, which forward through a
/// type-level factory function.
pub const INIT_PEER_NAME: &str = "___init";

/// The binding name a setter receives for its incoming value.
pub const SETTER_VALUE_NAME: &str = "newValue";

/// A synthesized peer declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerDecl {
    Property(PeerProperty),
    Function(PeerFunction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerProperty {
    pub attributes: Vec<Attribute>,
    pub modifiers: DeclModifiers,
    pub name: String,
    pub ty: String,
    pub body: PeerPropertyBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerPropertyBody {
    /// Implicit getter: `var x: T { <expr> }`.
    GetterShorthand(Expr),
    Accessors(Vec<PeerAccessor>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerAccessorKind {
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerAccessor {
    pub kind: PeerAccessorKind,
    pub effects: EffectSignature,
    pub body: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerFunction {
    pub attributes: Vec<Attribute>,
    pub modifiers: DeclModifiers,
    pub name: String,
    pub generic_params: Option<String>,
    pub params: Vec<Param>,
    pub effects: EffectSignature,
    pub return_type: Option<String>,
    pub where_clause: Option<String>,
    pub body: Expr,
}

/// Forwarding-body expressions. Deliberately tiny: a peer body is one
/// read, one write, or one call, optionally wrapped in effect markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    Call { callee: String, args: Vec<Arg> },
    Assign { target: Box<Expr>, value: Box<Expr> },
    Try(Box<Expr>),
    Await(Box<Expr>),
    InOut(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub label: Option<String>,
    pub value: Expr,
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Ident(name.into())
    }

    pub fn assign(target: Expr, value: Expr) -> Expr {
        Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }
}

/// Rebuild the forwarding call's argument list from the parameter
/// descriptors: the external label (omitted for wildcard labels) bound
/// to the internal name, with a by-reference marker where the parameter
/// type carries one.
pub fn forwarding_call(callee: impl Into<String>, params: &[Param]) -> Expr {
    let args = params
        .iter()
        .map(|param| {
            let label = match &param.label {
                ParamLabel::Identifier(name) => Some(name.clone()),
                ParamLabel::Wildcard => None,
            };
            let mut value = Expr::ident(param.forwarded_name());
            if param.is_byref {
                value = Expr::InOut(Box::new(value));
            }
            Arg { label, value }
        })
        .collect();
    Expr::Call {
        callee: callee.into(),
        args,
    }
}

/// Wrap an expression in effect markers. The suspend marker is the
/// inner wrap, so the rendered call site reads `try await expr` and a
/// suspending call is awaited before its failure is propagated.
pub fn apply_effects(effects: EffectSignature, expr: Expr) -> Expr {
    let mut expr = expr;
    if effects.is_async {
        expr = Expr::Await(Box::new(expr));
    }
    if effects.is_throws {
        expr = Expr::Try(Box::new(expr));
    }
    expr
}

/// Rewrite the modifier set for the peer: restrictive visibility is
/// always stripped; `static`/`class` collapse to `static`; everything
/// else passes through. `force_type_level` is set for initializer
/// peers, which are type-level by construction.
pub fn peer_modifiers(input: DeclModifiers, force_type_level: bool) -> DeclModifiers {
    let type_level = force_type_level || input.intersects(DeclModifiers::TYPE_LEVEL);
    let mut out = input - DeclModifiers::RESTRICTIVE - DeclModifiers::TYPE_LEVEL;
    if type_level {
        out |= DeclModifiers::STATIC;
    }
    out
}

/// Copy every attribute except the triggering marker, which must not
/// recurse onto the synthesized peer.
pub fn peer_attributes(attributes: &[Attribute], trigger: &Attribute) -> Vec<Attribute> {
    attributes
        .iter()
        .filter(|a| a.name != trigger.name)
        .cloned()
        .collect()
}

pub fn peer_name(original: &str) -> String {
    format!("{}{}", RENAME_PREFIX, original)
}

/// Synthesize the peer for a property. The accessor bodies read and
/// write the original identifier by name; the peer coexists alongside
/// the original rather than replacing it.
pub fn synthesize_property(facts: &PropertyFacts<'_>, trigger: &Attribute) -> PeerDecl {
    let read = Expr::ident(facts.name);
    let write = Expr::assign(Expr::ident(facts.name), Expr::ident(SETTER_VALUE_NAME));

    let body = match facts.mutability {
        PropertyMutability::ReadOnly => PeerPropertyBody::GetterShorthand(read),
        PropertyMutability::Stored => PeerPropertyBody::Accessors(vec![
            getter(EffectSignature::NONE, read),
            setter(EffectSignature::NONE, write),
        ]),
        PropertyMutability::ComputedGetOnly { effects } => {
            PeerPropertyBody::Accessors(vec![getter(effects, apply_effects(effects, read))])
        }
        PropertyMutability::ComputedGetSet { getter_effects } => {
            // The setter inherits the getter's effect qualifiers; its
            // own effects are not separately modeled.
            PeerPropertyBody::Accessors(vec![
                getter(getter_effects, apply_effects(getter_effects, read)),
                setter(getter_effects, apply_effects(getter_effects, write)),
            ])
        }
    };

    PeerDecl::Property(PeerProperty {
        attributes: peer_attributes(facts.attributes, trigger),
        modifiers: peer_modifiers(facts.modifiers, false),
        name: peer_name(facts.name),
        ty: facts.ty.to_string(),
        body,
    })
}

fn getter(effects: EffectSignature, body: Expr) -> PeerAccessor {
    PeerAccessor {
        kind: PeerAccessorKind::Get,
        effects,
        body,
    }
}

fn setter(effects: EffectSignature, body: Expr) -> PeerAccessor {
    PeerAccessor {
        kind: PeerAccessorKind::Set,
        effects,
        body,
    }
}

/// Synthesize the peer for a function: identical signature under the
/// renamed identifier, body forwarding to the original.
pub fn synthesize_function(facts: &FunctionFacts<'_>, trigger: &Attribute) -> PeerDecl {
    let call = forwarding_call(facts.name, facts.params);
    PeerDecl::Function(PeerFunction {
        attributes: peer_attributes(facts.attributes, trigger),
        modifiers: peer_modifiers(facts.modifiers, false),
        name: peer_name(facts.name),
        generic_params: facts.generic_params.map(str::to_string),
        params: facts.params.to_vec(),
        effects: facts.effects,
        return_type: facts.return_type.map(str::to_string),
        where_clause: facts.where_clause.map(str::to_string),
        body: apply_effects(facts.effects, call),
    })
}

/// Synthesize the peer for an initializer: a type-level factory
/// function, since a peer cannot itself be an initializer. The return
/// type tracks the failability mark.
pub fn synthesize_initializer(facts: &InitFacts<'_>, trigger: &Attribute) -> PeerDecl {
    let return_type = match facts.failability {
        Failability::None => "Self",
        Failability::Optional => "Self?",
        Failability::ForcedOptional => "Self!",
    };
    let call = forwarding_call("Self.init", facts.params);
    PeerDecl::Function(PeerFunction {
        attributes: peer_attributes(facts.attributes, trigger),
        modifiers: peer_modifiers(DeclModifiers::empty(), true),
        name: INIT_PEER_NAME.to_string(),
        generic_params: facts.generic_params.map(str::to_string),
        params: facts.params.to_vec(),
        effects: facts.effects,
        return_type: Some(return_type.to_string()),
        where_clause: facts.where_clause.map(str::to_string),
        body: apply_effects(facts.effects, call),
    })
}
