//! The [`FunctionSignature`] input surface for the compiler.
//!
//! A signature carries everything the compiler inspects about a
//! callable: its name, its documentation text, its parameters in
//! declaration order, and its return annotation.

use crate::annotation::Annotation;
use indexmap::IndexMap;

/// A callable's name, documentation, and annotated parameters.
///
/// Parameters keep declaration order end-to-end; the order of
/// [`param`](Self::param) calls is the order of the compiled schema's
/// properties.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    name: String,
    doc: Option<String>,
    params: IndexMap<String, Annotation>,
    returns: Option<Annotation>,
}

impl FunctionSignature {
    /// Creates a signature with the given function name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: IndexMap::new(),
            returns: None,
        }
    }

    /// Sets the documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declares a parameter. Redeclaring a name replaces its annotation
    /// without changing its position.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, annotation: Annotation) -> Self {
        self.params.insert(name.into(), annotation);
        self
    }

    /// Declares the return annotation.
    #[must_use]
    pub fn returns(mut self, annotation: Annotation) -> Self {
        self.returns = Some(annotation);
        self
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the documentation text, if any.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Iterates the declared parameters in declaration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &Annotation)> {
        self.params.iter().map(|(name, ann)| (name.as_str(), ann))
    }

    /// Returns the return annotation, if any.
    #[must_use]
    pub fn return_annotation(&self) -> Option<&Annotation> {
        self.returns.as_ref()
    }
}
