//! Resolved type facts and the compatibility oracle.
//!
//! The engine never computes type compatibility itself. The front-end records
//! the facts (underlying shapes, implements/assignability relations, one
//! level of reference indirection) in a [`TypeTable`], and the checks consult
//! them through the narrow [`TypeOracle`] trait.

use serde::{Deserialize, Serialize};

/// Opaque handle into the snapshot's type table. The front-end guarantees
/// canonical ids: two expressions of the identical type carry the same id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TypeId(pub u32);

/// The underlying shape of a type, driving conformance dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    Interface,
    Callable,
    Concrete,
}

/// A routine signature, as parameter and result type lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<TypeId>,
    #[serde(default)]
    pub results: Vec<TypeId>,
}

/// One entry in the type table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Printable form (`*B`, `I`, `func(string) bool`, ...).
    pub display: String,
    #[serde(default = "default_shape")]
    pub shape: TypeShape,
    /// Declaring package path, for named types.
    #[serde(default)]
    pub package: Option<String>,
    /// Declared name, for named types.
    #[serde(default)]
    pub name: Option<String>,
    /// Set when this entry is a reference type: the referent.
    #[serde(default)]
    pub points_to: Option<TypeId>,
    /// Interfaces this type satisfies structurally.
    #[serde(default)]
    pub implements: Vec<TypeId>,
    /// Types this type is assignable to, beyond itself.
    #[serde(default)]
    pub assignable_to: Vec<TypeId>,
    /// Signature, for callable shapes.
    #[serde(default)]
    pub signature: Option<Signature>,
}

fn default_shape() -> TypeShape {
    TypeShape::Concrete
}

/// Fact-backed implementation of [`TypeOracle`], indexed by `TypeId`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable {
    entries: Vec<TypeEntry>,
}

impl TypeTable {
    pub fn new(entries: Vec<TypeEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, t: TypeId) -> Option<&TypeEntry> {
        self.entries.get(t.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The type-compatibility oracle consumed by the checks.
///
/// Implementations must be `Sync`: the engine shares one oracle across rayon
/// workers.
pub trait TypeOracle: Sync {
    /// Underlying shape of `t`, or `None` for an unknown id.
    fn shape_of(&self, t: TypeId) -> Option<TypeShape>;

    /// Does `t` structurally implement the interface type `iface`?
    fn implements(&self, t: TypeId, iface: TypeId) -> bool;

    /// Is `t` assignable to `to`? Reflexive by definition.
    fn assignable(&self, t: TypeId, to: TypeId) -> bool;

    /// Strip one level of reference indirection, if `t` is a reference.
    fn deref(&self, t: TypeId) -> Option<TypeId>;

    /// The reference type pointing at `t`, when the program mentions one.
    fn ref_of(&self, t: TypeId) -> Option<TypeId>;

    /// Signature of `t`, for callable shapes.
    fn signature(&self, t: TypeId) -> Option<&Signature>;

    /// Declaring package and name, for named types.
    fn named(&self, t: TypeId) -> Option<(&str, &str)>;

    /// Printable form of `t` for diagnostics.
    fn display(&self, t: TypeId) -> String;
}

impl TypeOracle for TypeTable {
    fn shape_of(&self, t: TypeId) -> Option<TypeShape> {
        self.get(t).map(|e| e.shape)
    }

    fn implements(&self, t: TypeId, iface: TypeId) -> bool {
        self.get(t)
            .map(|e| e.implements.contains(&iface))
            .unwrap_or(false)
    }

    fn assignable(&self, t: TypeId, to: TypeId) -> bool {
        if t == to {
            return true;
        }
        self.get(t)
            .map(|e| e.assignable_to.contains(&to))
            .unwrap_or(false)
    }

    fn deref(&self, t: TypeId) -> Option<TypeId> {
        self.get(t).and_then(|e| e.points_to)
    }

    fn ref_of(&self, t: TypeId) -> Option<TypeId> {
        self.entries
            .iter()
            .position(|e| e.points_to == Some(t))
            .map(|i| TypeId(i as u32))
    }

    fn signature(&self, t: TypeId) -> Option<&Signature> {
        self.get(t).and_then(|e| e.signature.as_ref())
    }

    fn named(&self, t: TypeId) -> Option<(&str, &str)> {
        let entry = self.get(t)?;
        match (&entry.package, &entry.name) {
            (Some(p), Some(n)) => Some((p.as_str(), n.as_str())),
            _ => None,
        }
    }

    fn display(&self, t: TypeId) -> String {
        self.get(t)
            .map(|e| e.display.clone())
            .unwrap_or_else(|| "<unknown>".to_string())
    }
}
