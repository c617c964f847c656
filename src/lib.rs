//! Callable-to-schema compiler for LLM tool definitions.
//!
//! This crate turns a function signature — annotated parameters plus a
//! Google-style doc block — into a normalized, validated [`Tool`]
//! descriptor of the shape model runtimes expect: name, summary,
//! per-parameter JSON-Schema fragments with descriptions, a required
//! list, and a return type. Malformed annotations or documentation fail
//! loudly and specifically rather than being guessed around.
//!
//! # Quick Start
//!
//! ```
//! use toolschema::{Annotation, FunctionSignature, compile};
//!
//! let signature = FunctionSignature::new("add")
//!     .with_doc(
//!         "Add two numbers.\n\n\
//!          Args:\n    \
//!              a: First number\n    \
//!              b: Second number, optional\n",
//!     )
//!     .param("a", Annotation::Int)
//!     .param("b", Annotation::Union(vec![Annotation::Int, Annotation::None]))
//!     .returns(Annotation::Int);
//!
//! let tool = compile(&signature).unwrap();
//! assert_eq!(tool.function.parameters.required, ["a"]);
//! ```
//!
//! # Architecture
//!
//! - [`Annotation`] — the sum type for parameter type annotations
//! - [`resolve`] / [`is_optional`] — annotation resolution into [`SchemaKind`]s
//! - [`DocBlock`] — Google-style doc block scanner
//! - [`FunctionSignature`] — the callable input surface
//! - [`compile`] — signature → validated [`Tool`] descriptor
//! - [`normalize_tools`] — heterogeneous inputs → uniform descriptor list
//! - [`Tool::validate`] — the structural final gate

pub mod annotation;
pub mod compile;
pub mod docstring;
pub mod error;
pub mod normalize;
pub mod resolve;
pub mod signature;
pub mod tool;

// Re-export core types at crate root.
pub use annotation::Annotation;
pub use compile::compile;
pub use docstring::DocBlock;
pub use error::SchemaError;
pub use normalize::{ToolInput, normalize_tools};
pub use resolve::{ResolvedKind, SchemaKind, is_optional, resolve};
pub use signature::FunctionSignature;
pub use tool::{ObjectType, PropertySchema, Tool, ToolFunction, ToolParameters, ToolType};
