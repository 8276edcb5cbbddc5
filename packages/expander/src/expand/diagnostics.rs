//! Expansion Diagnostics
//!
//! Classified errors raised while recognizing a declaration shape, and
//! the user-facing diagnostics the host surfaces for them. Every error
//! is fatal for its site: the site contributes no peer declaration, and
//! other sites are unaffected.

use crate::syntax::span::SourceSpan;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A shape-recognition failure, anchored at the attribute application
/// site. The `attribute` field is the marker attribute's name, so the
/// message quotes whatever spelling the host registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The annotated node is not a property, function, or initializer.
    #[error("'@{attribute}' cannot be applied to this declaration")]
    UnsupportedDeclarationKind { attribute: String, span: SourceSpan },

    /// A property binds a pattern with no simple identifier name.
    #[error("'@{attribute}' cannot be applied to a property without a name")]
    MissingIdentifier { attribute: String, span: SourceSpan },

    /// A property has no explicit type annotation. Inference from the
    /// initializer expression is deliberately never attempted.
    #[error("'@{attribute}' requires an explicit type annotation")]
    MissingTypeAnnotation { attribute: String, span: SourceSpan },

    /// A binding introducer outside the immutable/mutable pair.
    #[error("'@{attribute}' cannot be applied to this binding")]
    UnsupportedBindingKind { attribute: String, span: SourceSpan },
}

impl ExpandError {
    pub fn span(&self) -> SourceSpan {
        match self {
            ExpandError::UnsupportedDeclarationKind { span, .. }
            | ExpandError::MissingIdentifier { span, .. }
            | ExpandError::MissingTypeAnnotation { span, .. }
            | ExpandError::UnsupportedBindingKind { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            message: self.to_string(),
            span: self.span(),
            level: DiagnosticLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

/// A rendered diagnostic ready for the host to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub span: SourceSpan,
    pub level: DiagnosticLevel,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            DiagnosticLevel::Warning => "WARNING",
            DiagnosticLevel::Error => "ERROR",
        };
        write!(f, "{}: {} at {}", level, self.message, self.span)
    }
}
