// ---------------------------------------------------------------------------
// FROZEN CONTRACT -- compilation unit snapshot model
// Produced by the language front-end, consumed read-only by strut-checks.
// Changing a field here changes the snapshot wire format.
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use strut_core::diagnostics::Span;

use crate::types::TypeId;

/// One compilation unit (a package's view of a single file): its own module
/// path, its imports, and the declarations the checks care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// The unit's own module path (e.g. `myproject/app/domain`).
    pub module_path: String,
    /// Source file the declarations came from, for diagnostics.
    pub file: String,
    #[serde(default)]
    pub imports: Vec<ImportDecl>,
    #[serde(default)]
    pub structs: Vec<StructDecl>,
    #[serde(default)]
    pub routines: Vec<RoutineDecl>,
}

/// An import edge: the imported module path and where it was declared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDecl {
    pub path: String,
    pub span: Span,
}

/// A struct type declaration with its fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    /// Resolved type of the struct itself (the value type, not a reference).
    pub ty: TypeId,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    pub span: Span,
}

/// A single struct field, with its raw tag literal when one is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(default)]
    pub ty: Option<TypeId>,
    #[serde(default)]
    pub tag: Option<TagLit>,
    pub span: Span,
}

/// A raw field tag, with the enclosing quote characters already stripped
/// (e.g. `inject:"cfg.name" json:"name"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagLit {
    pub raw: String,
    pub span: Span,
}

/// A routine declaration: free function or method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineDecl {
    pub name: String,
    #[serde(default)]
    pub receiver: Option<ReceiverDecl>,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// The receiver of a method. `by_ref` is false for value receivers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverDecl {
    pub name: String,
    pub type_name: String,
    pub by_ref: bool,
    /// Covers the whole receiver clause (`name Type`), so a suggested fix
    /// can rewrite it in place.
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(default)]
    pub ty: Option<TypeId>,
    pub span: Span,
}

/// Statements inside a routine body. Only the shapes the binding extractor
/// inspects are modelled; everything else collapses to `Other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    Expr { expr: Expr },
    /// A single-target local assignment (`b := injector.Bind(x)` or a
    /// re-aliasing `c := b`).
    Assign { target: String, value: Expr, span: Span },
    Other { span: Span },
}

/// Expressions, as a closed union. Every variant carries the resolved type
/// the front-end computed for it; `None` means the expression is untyped or
/// unresolved, which the checks treat as indeterminate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// A call `fun(args...)`.
    Call {
        fun: Box<Expr>,
        #[serde(default)]
        args: Vec<Expr>,
        #[serde(default)]
        ty: Option<TypeId>,
        span: Span,
    },
    /// A bare identifier, possibly resolving to a function.
    Ident {
        name: String,
        #[serde(default)]
        target: Option<FuncRef>,
        #[serde(default)]
        ty: Option<TypeId>,
        span: Span,
    },
    /// A selection `base.name`, possibly resolving to a function.
    Selector {
        base: Box<Expr>,
        name: String,
        #[serde(default)]
        target: Option<FuncRef>,
        #[serde(default)]
        ty: Option<TypeId>,
        span: Span,
    },
    /// Anything the checks don't inspect structurally (literals, composite
    /// expressions, arithmetic, ...).
    Other {
        #[serde(default)]
        ty: Option<TypeId>,
        span: Span,
    },
}

impl Expr {
    pub fn ty(&self) -> Option<TypeId> {
        match self {
            Expr::Call { ty, .. }
            | Expr::Ident { ty, .. }
            | Expr::Selector { ty, .. }
            | Expr::Other { ty, .. } => *ty,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Expr::Call { span, .. }
            | Expr::Ident { span, .. }
            | Expr::Selector { span, .. }
            | Expr::Other { span, .. } => span,
        }
    }

    /// The function this expression resolves to, for identifier and selector
    /// shapes.
    pub fn func_target(&self) -> Option<&FuncRef> {
        match self {
            Expr::Ident { target, .. } | Expr::Selector { target, .. } => target.as_ref(),
            _ => None,
        }
    }

    /// Best-effort rendition of the expression for diagnostics, standing in
    /// for the front-end's pretty printer.
    pub fn pretty(&self) -> String {
        match self {
            Expr::Call { fun, .. } => format!("{}(...)", fun.pretty()),
            Expr::Ident { name, .. } => name.clone(),
            Expr::Selector { base, name, .. } => format!("{}.{}", base.pretty(), name),
            Expr::Other { .. } => "<expr>".to_string(),
        }
    }
}

/// A resolved reference to a function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncRef {
    /// Package path of the declaring package.
    pub package: String,
    pub name: String,
    /// The function's signature type, when the front-end resolved one.
    #[serde(default)]
    pub sig: Option<TypeId>,
}
