//! Declaration Classifier
//!
//! Single classification pass over the input node. Everything downstream
//! matches on the resulting [`DeclShape`] tag; no component re-probes
//! the concrete node kind after this point.

use crate::expand::diagnostics::ExpandError;
use crate::syntax::ast::{Attribute, Decl, FunctionDecl, InitializerDecl, VariableDecl};

/// The recognized shape of an annotated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclShape<'a> {
    Property(&'a VariableDecl),
    Function(&'a FunctionDecl),
    Initializer(&'a InitializerDecl),
}

/// Classify one declaration, or reject it as unforwardable.
///
/// The error is anchored at the attribute application site, not the
/// declaration body.
pub fn classify<'a>(
    decl: &'a Decl,
    attribute: &Attribute,
) -> Result<DeclShape<'a>, ExpandError> {
    match decl {
        Decl::Variable(variable) => Ok(DeclShape::Property(variable)),
        Decl::Function(function) => Ok(DeclShape::Function(function)),
        Decl::Initializer(initializer) => Ok(DeclShape::Initializer(initializer)),
        Decl::Other(_) => Err(ExpandError::UnsupportedDeclarationKind {
            attribute: attribute.name.clone(),
            span: attribute.span,
        }),
    }
}
