//! Declaration AST
//!
//! The input tree data model for the expansion engine. These nodes are a
//! faithful, unvalidated description of one already-parsed declaration:
//! the engine never parses source text, it only reads what the host
//! parser hands it. Clause-shaped trivia the engine carries through
//! verbatim (generic parameter clauses, `where` clauses, type text,
//! default-value expressions) is stored as raw source fragments rather
//! than modeled structurally, because the engine copies it unchanged.

use crate::syntax::span::SourceSpan;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier keywords attached to a declaration.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct DeclModifiers: u8 {
        const PRIVATE     = 1 << 0;
        const FILEPRIVATE = 1 << 1;
        const STATIC      = 1 << 2;
        const CLASS_LEVEL = 1 << 3;
        const MUTATING    = 1 << 4;
    }
}

impl DeclModifiers {
    /// Visibility modifiers that restrict a member to its enclosing scope.
    pub const RESTRICTIVE: DeclModifiers = Self::PRIVATE.union(Self::FILEPRIVATE);

    /// Modifiers that put a member on the type rather than an instance.
    pub const TYPE_LEVEL: DeclModifiers = Self::STATIC.union(Self::CLASS_LEVEL);

    pub fn is_instance(self) -> bool {
        !self.intersects(Self::TYPE_LEVEL)
    }
}

/// A single attribute application, e.g. `@MainActor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub span: SourceSpan,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            span: SourceSpan::synthetic(),
        }
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }
}

/// Whether a member may suspend and/or may fail. Drives keyword
/// placement both in the synthesized signature and at the forwarding
/// call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSignature {
    pub is_async: bool,
    pub is_throws: bool,
}

impl EffectSignature {
    pub const NONE: EffectSignature = EffectSignature {
        is_async: false,
        is_throws: false,
    };

    pub fn new(is_async: bool, is_throws: bool) -> Self {
        EffectSignature { is_async, is_throws }
    }

    pub fn throws() -> Self {
        EffectSignature::new(false, true)
    }

    pub fn asynchronous() -> Self {
        EffectSignature::new(true, false)
    }

    pub fn async_throws() -> Self {
        EffectSignature::new(true, true)
    }

    pub fn is_empty(self) -> bool {
        !self.is_async && !self.is_throws
    }
}

/// One parsed declaration, tagged by concrete kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Variable(VariableDecl),
    Function(FunctionDecl),
    Initializer(InitializerDecl),
    /// Everything the engine cannot forward: type declarations,
    /// subscripts, extensions, operators.
    Other(OtherDecl),
}

impl Decl {
    pub fn span(&self) -> SourceSpan {
        match self {
            Decl::Variable(v) => v.span,
            Decl::Function(f) => f.span,
            Decl::Initializer(i) => i.span,
            Decl::Other(o) => o.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherDecl {
    /// Introducing keyword as written, e.g. `struct` or `subscript`.
    pub keyword: String,
    pub name: Option<String>,
    pub span: SourceSpan,
}

impl OtherDecl {
    pub fn new(keyword: impl Into<String>) -> Self {
        OtherDecl {
            keyword: keyword.into(),
            name: None,
            span: SourceSpan::synthetic(),
        }
    }
}

/// The keyword that introduces a variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingIntroducer {
    Immutable,
    Mutable,
    /// Any future or dialect-specific introducer the engine does not
    /// understand; carried as written for diagnostics.
    Other(String),
}

/// The binding pattern of a variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingPattern {
    Identifier(String),
    /// Tuple or wildcard patterns; not forwardable.
    Other(String),
}

/// The accessor block of a variable declaration, when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorBlock {
    /// `var x: T { <body> }` shorthand, an implicit getter.
    GetterShorthand(String),
    Accessors(Vec<AccessorDecl>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
    /// Observers (`willSet`/`didSet`) and anything else; their presence
    /// does not make a stored variable computed.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDecl {
    pub kind: AccessorKind,
    pub effects: EffectSignature,
    /// Body text as written; never inspected, never copied to output.
    pub body: String,
}

impl AccessorDecl {
    pub fn new(kind: AccessorKind, body: impl Into<String>) -> Self {
        AccessorDecl {
            kind,
            effects: EffectSignature::NONE,
            body: body.into(),
        }
    }

    pub fn with_effects(mut self, effects: EffectSignature) -> Self {
        self.effects = effects;
        self
    }
}

/// A stored or computed variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: DeclModifiers,
    pub introducer: BindingIntroducer,
    pub pattern: BindingPattern,
    /// Declared type text, e.g. `String`. Required for expansion; the
    /// engine deliberately never infers a type from the initializer.
    pub type_annotation: Option<String>,
    /// Initializer expression text as written; never inspected.
    pub initializer: Option<String>,
    pub accessors: Option<AccessorBlock>,
    pub span: SourceSpan,
}

impl VariableDecl {
    pub fn new(introducer: BindingIntroducer, name: impl Into<String>) -> Self {
        VariableDecl {
            attributes: Vec::new(),
            modifiers: DeclModifiers::empty(),
            introducer,
            pattern: BindingPattern::Identifier(name.into()),
            type_annotation: None,
            initializer: None,
            accessors: None,
            span: SourceSpan::synthetic(),
        }
    }

    pub fn immutable(name: impl Into<String>) -> Self {
        VariableDecl::new(BindingIntroducer::Immutable, name)
    }

    pub fn mutable(name: impl Into<String>) -> Self {
        VariableDecl::new(BindingIntroducer::Mutable, name)
    }

    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.type_annotation = Some(ty.into());
        self
    }

    pub fn with_initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: DeclModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_accessors(mut self, accessors: AccessorBlock) -> Self {
        self.accessors = Some(accessors);
        self
    }

    /// A variable is computed when it declares a getter, either through
    /// an explicit `get` accessor or the getter shorthand.
    pub fn is_computed(&self) -> bool {
        match &self.accessors {
            Some(AccessorBlock::GetterShorthand(_)) => true,
            Some(AccessorBlock::Accessors(accessors)) => accessors
                .iter()
                .any(|a| matches!(a.kind, AccessorKind::Get)),
            None => false,
        }
    }

    pub fn accessor_matching(&self, kind: &AccessorKind) -> Option<&AccessorDecl> {
        match &self.accessors {
            Some(AccessorBlock::Accessors(accessors)) => {
                accessors.iter().find(|a| a.kind == *kind)
            }
            _ => None,
        }
    }
}

/// External argument label of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamLabel {
    Identifier(String),
    /// The `_` marker: callers pass this argument unlabeled.
    Wildcard,
}

/// One parameter of a function or initializer signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Type attributes carried verbatim, e.g. `@escaping`.
    pub type_attributes: Vec<String>,
    pub label: ParamLabel,
    /// Second name, when the declaration names the binding separately
    /// from the label.
    pub internal_name: Option<String>,
    /// The type carries an `inout` specifier; forwarded arguments must
    /// be passed by reference.
    pub is_byref: bool,
    /// Type text as written, e.g. `String` or `() -> String`.
    pub ty: String,
    /// Default-value expression text, carried verbatim.
    pub default_value: Option<String>,
    pub span: SourceSpan,
}

impl Param {
    pub fn labeled(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Param {
            type_attributes: Vec::new(),
            label: ParamLabel::Identifier(label.into()),
            internal_name: None,
            is_byref: false,
            ty: ty.into(),
            default_value: None,
            span: SourceSpan::synthetic(),
        }
    }

    /// `label internal: Ty` — distinct external label and binding name.
    pub fn named(
        label: impl Into<String>,
        internal: impl Into<String>,
        ty: impl Into<String>,
    ) -> Self {
        let mut param = Param::labeled(label, ty);
        param.internal_name = Some(internal.into());
        param
    }

    /// `_ internal: Ty` — callers pass the argument unlabeled.
    pub fn unlabeled(internal: impl Into<String>, ty: impl Into<String>) -> Self {
        Param {
            type_attributes: Vec::new(),
            label: ParamLabel::Wildcard,
            internal_name: Some(internal.into()),
            is_byref: false,
            ty: ty.into(),
            default_value: None,
            span: SourceSpan::synthetic(),
        }
    }

    pub fn byref(mut self) -> Self {
        self.is_byref = true;
        self
    }

    pub fn with_default(mut self, expr: impl Into<String>) -> Self {
        self.default_value = Some(expr.into());
        self
    }

    pub fn with_type_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.type_attributes.push(attribute.into());
        self
    }

    /// The name the forwarding call binds this parameter under: the
    /// second name when declared, otherwise the label itself.
    pub fn forwarded_name(&self) -> &str {
        if let Some(internal) = &self.internal_name {
            return internal;
        }
        match &self.label {
            ParamLabel::Identifier(name) => name,
            // `_` with no second name is unforwardable; nothing sane to
            // bind, so surface the wildcard as written.
            ParamLabel::Wildcard => "_",
        }
    }
}

/// A named function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: DeclModifiers,
    pub name: String,
    /// Generic parameter clause text including angle brackets, e.g.
    /// `<T: Equatable>`; carried verbatim.
    pub generic_params: Option<String>,
    pub params: Vec<Param>,
    pub effects: EffectSignature,
    /// Return type text; `None` for procedures.
    pub return_type: Option<String>,
    /// Trailing constraint clause text including the `where` keyword;
    /// carried verbatim.
    pub where_clause: Option<String>,
    pub span: SourceSpan,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, params: Vec<Param>) -> Self {
        FunctionDecl {
            attributes: Vec::new(),
            modifiers: DeclModifiers::empty(),
            name: name.into(),
            generic_params: None,
            params,
            effects: EffectSignature::NONE,
            return_type: None,
            where_clause: None,
            span: SourceSpan::synthetic(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: DeclModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_effects(mut self, effects: EffectSignature) -> Self {
        self.effects = effects;
        self
    }

    pub fn with_return_type(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn with_generics(mut self, params: impl Into<String>) -> Self {
        self.generic_params = Some(params.into());
        self
    }

    pub fn with_where_clause(mut self, clause: impl Into<String>) -> Self {
        self.where_clause = Some(clause.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Failability mark on an initializer: `init`, `init?`, or `init!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failability {
    None,
    Optional,
    ForcedOptional,
}

/// An initializer declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerDecl {
    pub attributes: Vec<Attribute>,
    pub modifiers: DeclModifiers,
    pub failability: Failability,
    pub generic_params: Option<String>,
    pub params: Vec<Param>,
    pub effects: EffectSignature,
    pub where_clause: Option<String>,
    pub span: SourceSpan,
}

impl InitializerDecl {
    pub fn new(params: Vec<Param>) -> Self {
        InitializerDecl {
            attributes: Vec::new(),
            modifiers: DeclModifiers::empty(),
            failability: Failability::None,
            generic_params: None,
            params,
            effects: EffectSignature::NONE,
            where_clause: None,
            span: SourceSpan::synthetic(),
        }
    }

    pub fn with_failability(mut self, failability: Failability) -> Self {
        self.failability = failability;
        self
    }

    pub fn with_modifiers(mut self, modifiers: DeclModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_effects(mut self, effects: EffectSignature) -> Self {
        self.effects = effects;
        self
    }

    pub fn with_generics(mut self, params: impl Into<String>) -> Self {
        self.generic_params = Some(params.into());
        self
    }

    pub fn with_where_clause(mut self, clause: impl Into<String>) -> Self {
        self.where_clause = Some(clause.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}
