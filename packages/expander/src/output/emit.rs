//! Source Emitter
//!
//! Renders synthesized peer declarations back to source text. Rendering
//! is match-driven over the output node kinds; formatting is canonical
//! (two-space indent, attributes one per line, one-expression bodies on
//! one line) regardless of how the original declaration was laid out.

use crate::expand::synthesize::{
    Arg, Expr, PeerAccessor, PeerAccessorKind, PeerDecl, PeerFunction, PeerProperty,
    PeerPropertyBody,
};
use crate::expand::GatedDecl;
use crate::syntax::ast::{Attribute, DeclModifiers, EffectSignature, Param, ParamLabel};

const INDENT_WITH: &str = "  ";

lazy_static::lazy_static! {
    /// Modifier keywords in their canonical rendering order.
    static ref MODIFIER_KEYWORDS: Vec<(DeclModifiers, &'static str)> = vec![
        (DeclModifiers::PRIVATE, "private"),
        (DeclModifiers::FILEPRIVATE, "fileprivate"),
        (DeclModifiers::STATIC, "static"),
        (DeclModifiers::CLASS_LEVEL, "class"),
        (DeclModifiers::MUTATING, "mutating"),
    ];
}

#[derive(Debug)]
struct EmittedLine {
    indent: usize,
    parts: Vec<String>,
}

/// Line/indent printer for declaration rendering.
#[derive(Debug, Default)]
pub struct EmitterContext {
    lines: Vec<EmittedLine>,
    indent: usize,
}

impl EmitterContext {
    pub fn new() -> Self {
        EmitterContext::default()
    }

    pub fn println(&mut self, line: impl Into<String>) {
        let indent = self.indent;
        self.lines.push(EmittedLine {
            indent,
            parts: vec![line.into()],
        });
    }

    pub fn inc_indent(&mut self) {
        self.indent += 1;
    }

    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn to_source(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                let text = line.parts.concat();
                if text.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", INDENT_WITH.repeat(line.indent), text)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a gated peer as a conditional-compilation block.
pub fn emit_gated(gated: &GatedDecl) -> String {
    let mut ctx = EmitterContext::new();
    ctx.println(format!("#if {}", gated.condition));
    emit_peer(&gated.decl, &mut ctx);
    ctx.println("#endif");
    ctx.to_source()
}

pub fn emit_peer(decl: &PeerDecl, ctx: &mut EmitterContext) {
    match decl {
        PeerDecl::Property(property) => emit_property(property, ctx),
        PeerDecl::Function(function) => emit_function(function, ctx),
    }
}

fn emit_property(property: &PeerProperty, ctx: &mut EmitterContext) {
    emit_attributes(&property.attributes, ctx);
    let head = format!(
        "{}var {}: {} {{",
        render_modifiers(property.modifiers),
        property.name,
        property.ty
    );
    ctx.println(head);
    ctx.inc_indent();
    match &property.body {
        PeerPropertyBody::GetterShorthand(expr) => {
            ctx.println(render_expr(expr));
        }
        PeerPropertyBody::Accessors(accessors) => {
            for accessor in accessors {
                emit_accessor(accessor, ctx);
            }
        }
    }
    ctx.dec_indent();
    ctx.println("}");
}

fn emit_accessor(accessor: &PeerAccessor, ctx: &mut EmitterContext) {
    let keyword = match accessor.kind {
        PeerAccessorKind::Get => "get",
        PeerAccessorKind::Set => "set",
    };
    ctx.println(format!(
        "{}{} {{",
        keyword,
        render_effects(accessor.effects)
    ));
    ctx.inc_indent();
    ctx.println(render_expr(&accessor.body));
    ctx.dec_indent();
    ctx.println("}");
}

fn emit_function(function: &PeerFunction, ctx: &mut EmitterContext) {
    emit_attributes(&function.attributes, ctx);
    let mut head = format!(
        "{}func {}{}({}){}",
        render_modifiers(function.modifiers),
        function.name,
        function.generic_params.as_deref().unwrap_or(""),
        render_params(&function.params),
        render_effects(function.effects),
    );
    if let Some(return_type) = &function.return_type {
        head.push_str(&format!(" -> {}", return_type));
    }
    if let Some(where_clause) = &function.where_clause {
        head.push_str(&format!(" {}", where_clause));
    }
    head.push_str(" {");
    ctx.println(head);
    ctx.inc_indent();
    ctx.println(render_expr(&function.body));
    ctx.dec_indent();
    ctx.println("}");
}

fn emit_attributes(attributes: &[Attribute], ctx: &mut EmitterContext) {
    for attribute in attributes {
        ctx.println(format!("@{}", attribute.name));
    }
}

fn render_modifiers(modifiers: DeclModifiers) -> String {
    let mut out = String::new();
    for (flag, keyword) in MODIFIER_KEYWORDS.iter() {
        if modifiers.contains(*flag) {
            out.push_str(keyword);
            out.push(' ');
        }
    }
    out
}

/// Effect keywords for a signature, suspend marker first. Leading space
/// included so empty signatures render nothing.
fn render_effects(effects: EffectSignature) -> String {
    let mut out = String::new();
    if effects.is_async {
        out.push_str(" async");
    }
    if effects.is_throws {
        out.push_str(" throws");
    }
    out
}

fn render_params(params: &[Param]) -> String {
    params
        .iter()
        .map(render_param)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_param(param: &Param) -> String {
    let mut out = String::new();
    match &param.label {
        ParamLabel::Identifier(name) => out.push_str(name),
        ParamLabel::Wildcard => out.push('_'),
    }
    if let Some(internal) = &param.internal_name {
        out.push(' ');
        out.push_str(internal);
    }
    out.push_str(": ");
    for attribute in &param.type_attributes {
        out.push_str(attribute);
        out.push(' ');
    }
    if param.is_byref {
        out.push_str("inout ");
    }
    out.push_str(&param.ty);
    if let Some(default_value) = &param.default_value {
        out.push_str(&format!(" = {}", default_value));
    }
    out
}

pub fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Call { callee, args } => format!("{}({})", callee, render_args(args)),
        Expr::Assign { target, value } => {
            format!("{} = {}", render_expr(target), render_expr(value))
        }
        Expr::Try(inner) => format!("try {}", render_expr(inner)),
        Expr::Await(inner) => format!("await {}", render_expr(inner)),
        Expr::InOut(inner) => format!("&{}", render_expr(inner)),
    }
}

fn render_args(args: &[Arg]) -> String {
    args.iter()
        .map(|arg| match &arg.label {
            Some(label) => format!("{}: {}", label, render_expr(&arg.value)),
            None => render_expr(&arg.value),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
