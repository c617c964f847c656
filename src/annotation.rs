//! The [`Annotation`] sum type describing a parameter's declared type.
//!
//! Annotations are read-only inputs to the compiler. They cover the
//! primitive kinds, the absence marker used inside unions to express
//! optionality, shallow containers, unions, and forward references
//! (types named by string identifier).

use core::fmt;

/// A type annotation attached to a parameter or to the return slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Integer-like type.
    Int,
    /// Text-like type.
    Str,
    /// Floating-point type.
    Float,
    /// Boolean type.
    Bool,
    /// The absence marker (`None`/null). Inside a union it expresses
    /// optionality; on its own it resolves to the `null` kind.
    None,
    /// Open/untyped marker. Degrades to the permissive `string` kind.
    Any,
    /// Sequence-like container over an element annotation.
    Sequence(Box<Annotation>),
    /// Tuple container over per-slot annotations.
    Tuple(Vec<Annotation>),
    /// Set-like container over an element annotation.
    Set(Box<Annotation>),
    /// Mapping container over key and value annotations.
    Mapping(Box<Annotation>, Box<Annotation>),
    /// Union of two or more alternative annotations.
    Union(Vec<Annotation>),
    /// Forward reference: a type named by string identifier.
    ///
    /// The string may itself encode a union (`"int | None"`) or a
    /// parameterized container (`"list[int]"`); both behave like their
    /// runtime counterparts.
    Name(String),
}

impl Annotation {
    /// Returns true if this annotation is the absence marker.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::None => true,
            Self::Name(name) => {
                let name = name.trim();
                name.eq_ignore_ascii_case("none") || name.eq_ignore_ascii_case("null")
            }
            _ => false,
        }
    }

    /// Returns the members of a union-like annotation, or `None` when the
    /// annotation is not a union.
    ///
    /// String-encoded unions (`"int | str"`) are split on `|` so that
    /// forward references participate in optional-stripping exactly like
    /// runtime unions.
    #[must_use]
    pub fn union_members(&self) -> Option<Vec<Annotation>> {
        match self {
            Self::Union(members) => Some(members.clone()),
            Self::Name(name) if name.contains('|') => Some(
                name.split('|')
                    .map(|part| Self::Name(part.trim().to_string()))
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Str => f.write_str("str"),
            Self::Float => f.write_str("float"),
            Self::Bool => f.write_str("bool"),
            Self::None => f.write_str("None"),
            Self::Any => f.write_str("Any"),
            Self::Sequence(element) => write!(f, "list[{element}]"),
            Self::Tuple(slots) => {
                f.write_str("tuple[")?;
                for (i, slot) in slots.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{slot}")?;
                }
                f.write_str("]")
            }
            Self::Set(element) => write!(f, "set[{element}]"),
            Self::Mapping(key, value) => write!(f, "dict[{key}, {value}]"),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Self::Name(name) => f.write_str(name),
        }
    }
}
