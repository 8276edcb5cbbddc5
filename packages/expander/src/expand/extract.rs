//! Shape Feature Extractor
//!
//! Reads the facts regeneration needs out of a classified declaration.
//! Pure: no node is mutated, nothing is cached. Property extraction is
//! the only fallible path; function and initializer facts are total
//! over well-formed nodes.

use crate::expand::diagnostics::ExpandError;
use crate::syntax::ast::{
    AccessorBlock, AccessorKind, Attribute, BindingIntroducer, BindingPattern, DeclModifiers,
    EffectSignature, Failability, FunctionDecl, InitializerDecl, Param, VariableDecl,
};

/// How a property can be read and written through the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyMutability {
    /// Immutable binding: the peer is a read-only shorthand getter.
    ReadOnly,
    /// Plain stored mutable variable: the peer gets both accessors.
    Stored,
    /// Computed with a getter only; the peer mirrors the original
    /// accessor set exactly and carries the getter's effects.
    ComputedGetOnly { effects: EffectSignature },
    /// Computed with getter and setter. Only the getter's effects are
    /// modeled; a setter's independently-declared effects are a known
    /// scope limitation.
    ComputedGetSet { getter_effects: EffectSignature },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyFacts<'a> {
    pub name: &'a str,
    pub ty: &'a str,
    pub mutability: PropertyMutability,
    pub modifiers: DeclModifiers,
    pub attributes: &'a [Attribute],
}

pub fn property_facts<'a>(
    variable: &'a VariableDecl,
    attribute: &Attribute,
) -> Result<PropertyFacts<'a>, ExpandError> {
    let name = match &variable.pattern {
        BindingPattern::Identifier(name) => name.as_str(),
        BindingPattern::Other(_) => {
            return Err(ExpandError::MissingIdentifier {
                attribute: attribute.name.clone(),
                span: attribute.span,
            });
        }
    };

    // The peer's declared type must be statically visible at the
    // expansion site; expansion runs before type inference.
    let ty = match &variable.type_annotation {
        Some(ty) => ty.as_str(),
        None => {
            return Err(ExpandError::MissingTypeAnnotation {
                attribute: attribute.name.clone(),
                span: attribute.span,
            });
        }
    };

    let mutability = match &variable.introducer {
        BindingIntroducer::Immutable => PropertyMutability::ReadOnly,
        BindingIntroducer::Mutable => classify_mutable(variable),
        BindingIntroducer::Other(_) => {
            return Err(ExpandError::UnsupportedBindingKind {
                attribute: attribute.name.clone(),
                span: attribute.span,
            });
        }
    };

    Ok(PropertyFacts {
        name,
        ty,
        mutability,
        modifiers: variable.modifiers,
        attributes: &variable.attributes,
    })
}

fn classify_mutable(variable: &VariableDecl) -> PropertyMutability {
    if !variable.is_computed() {
        // Stored, possibly with observers; observers never make a
        // variable computed.
        return PropertyMutability::Stored;
    }

    let getter_effects = match &variable.accessors {
        Some(AccessorBlock::GetterShorthand(_)) => EffectSignature::NONE,
        _ => variable
            .accessor_matching(&AccessorKind::Get)
            .map(|a| a.effects)
            .unwrap_or(EffectSignature::NONE),
    };

    if variable.accessor_matching(&AccessorKind::Set).is_some() {
        PropertyMutability::ComputedGetSet { getter_effects }
    } else {
        PropertyMutability::ComputedGetOnly {
            effects: getter_effects,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionFacts<'a> {
    pub name: &'a str,
    pub generic_params: Option<&'a str>,
    pub where_clause: Option<&'a str>,
    pub params: &'a [Param],
    pub effects: EffectSignature,
    pub return_type: Option<&'a str>,
    pub modifiers: DeclModifiers,
    pub attributes: &'a [Attribute],
}

pub fn function_facts(function: &FunctionDecl) -> FunctionFacts<'_> {
    FunctionFacts {
        name: &function.name,
        generic_params: function.generic_params.as_deref(),
        where_clause: function.where_clause.as_deref(),
        params: &function.params,
        effects: function.effects,
        return_type: function.return_type.as_deref(),
        modifiers: function.modifiers,
        attributes: &function.attributes,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InitFacts<'a> {
    pub failability: Failability,
    pub generic_params: Option<&'a str>,
    pub where_clause: Option<&'a str>,
    pub params: &'a [Param],
    pub effects: EffectSignature,
    pub attributes: &'a [Attribute],
}

pub fn initializer_facts(initializer: &InitializerDecl) -> InitFacts<'_> {
    InitFacts {
        failability: initializer.failability,
        generic_params: initializer.generic_params.as_deref(),
        where_clause: initializer.where_clause.as_deref(),
        params: &initializer.params,
        effects: initializer.effects,
        attributes: &initializer.attributes,
    }
}
