//! Annotation resolution into JSON-Schema primitive kinds.
//!
//! [`resolve`] reduces an [`Annotation`] to a [`ResolvedKind`] through a
//! fixed lookup table, stripping absence markers out of unions along the
//! way. [`is_optional`] reports whether an annotation is a union that
//! includes the absence marker.

use crate::annotation::Annotation;
use crate::error::SchemaError;
use serde::{Deserialize, Serialize};

/// The closed set of JSON-Schema primitive type names this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// Whole numbers.
    Integer,
    /// Text.
    String,
    /// Floating-point numbers.
    Number,
    /// True/false.
    Boolean,
    /// The null type.
    Null,
    /// Ordered collections.
    Array,
    /// Key/value objects.
    Object,
}

impl SchemaKind {
    /// Returns the lowercase JSON-Schema name for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Result of resolving an annotation: a single kind, or an ordered list of
/// kinds for a non-optional union of multiple concrete types.
///
/// Serializes as either a string (`"integer"`) or an array
/// (`["number", "string"]`), matching the `type` field of the wire
/// contract. The list form is a first-class output variant, not an edge
/// case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedKind {
    /// A single schema kind.
    Single(SchemaKind),
    /// An ordered list of kinds, in original union-member order.
    Union(Vec<SchemaKind>),
}

/// Fixed lookup table from lowercased forward-reference identifiers to
/// schema kinds. Read-only after initialization.
const TYPE_MAP: &[(&str, SchemaKind)] = &[
    // Basic types
    ("int", SchemaKind::Integer),
    ("integer", SchemaKind::Integer),
    ("str", SchemaKind::String),
    ("string", SchemaKind::String),
    ("float", SchemaKind::Number),
    ("number", SchemaKind::Number),
    ("bool", SchemaKind::Boolean),
    ("boolean", SchemaKind::Boolean),
    ("none", SchemaKind::Null),
    ("null", SchemaKind::Null),
    // Collection types
    ("list", SchemaKind::Array),
    ("sequence", SchemaKind::Array),
    ("tuple", SchemaKind::Array),
    ("set", SchemaKind::Array),
    ("frozenset", SchemaKind::Array),
    // Mapping types
    ("dict", SchemaKind::Object),
    ("mapping", SchemaKind::Object),
    // Open/untyped marker degrades to a permissive textual kind
    ("any", SchemaKind::String),
];

/// Resolves an annotation to its schema kind(s).
///
/// Union handling strips absence markers first: one remaining member
/// resolves on its own, several resolve to an ordered kind list, and a
/// union of nothing but absence markers resolves to `null`. Containers
/// resolve shallowly by their base constructor (element and key/value
/// annotations are never inspected).
///
/// # Errors
///
/// Returns [`SchemaError::UnmappableType`] naming the annotation when it
/// cannot be reduced to a known kind.
pub fn resolve(annotation: &Annotation) -> Result<ResolvedKind, SchemaError> {
    if let Some(members) = annotation.union_members() {
        let concrete: Vec<Annotation> = members.into_iter().filter(|m| !m.is_absent()).collect();
        return match concrete.as_slice() {
            [] => Ok(ResolvedKind::Single(SchemaKind::Null)),
            [only] => resolve(only),
            many => {
                let mut kinds = Vec::with_capacity(many.len());
                for member in many {
                    match resolve(member)? {
                        ResolvedKind::Single(kind) => kinds.push(kind),
                        ResolvedKind::Union(nested) => kinds.extend(nested),
                    }
                }
                Ok(ResolvedKind::Union(kinds))
            }
        };
    }

    let kind = match annotation {
        Annotation::Int => SchemaKind::Integer,
        Annotation::Str => SchemaKind::String,
        Annotation::Float => SchemaKind::Number,
        Annotation::Bool => SchemaKind::Boolean,
        Annotation::None => SchemaKind::Null,
        Annotation::Any => SchemaKind::String,
        // Containers map shallowly by base constructor
        Annotation::Sequence(_) | Annotation::Tuple(_) | Annotation::Set(_) => SchemaKind::Array,
        Annotation::Mapping(..) => SchemaKind::Object,
        Annotation::Name(name) => {
            lookup(name).ok_or_else(|| SchemaError::unmappable_type(annotation))?
        }
        // union_members() returned Some for every Union above
        Annotation::Union(_) => unreachable!("unions are handled before the kind table"),
    };
    Ok(ResolvedKind::Single(kind))
}

/// Returns true iff the annotation is a union-like construct with at least
/// one member denoting absence.
#[must_use]
pub fn is_optional(annotation: &Annotation) -> bool {
    annotation
        .union_members()
        .is_some_and(|members| members.iter().any(Annotation::is_absent))
}

/// Looks up a forward-reference identifier in [`TYPE_MAP`].
///
/// The lookup is case-insensitive and uses only the base constructor of a
/// string-encoded parameterized container, so `"List[int]"` resolves the
/// same way `"list"` does.
fn lookup(name: &str) -> Option<SchemaKind> {
    let base = name.split('[').next().unwrap_or(name).trim();
    let key = base.to_ascii_lowercase();
    TYPE_MAP
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, kind)| *kind)
}
