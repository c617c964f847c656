//! Error types for schema compilation.

use thiserror::Error;

/// Errors that can occur while compiling a callable into a tool descriptor.
///
/// All variants are fail-fast: the compiler never guesses, substitutes a
/// default, or skips the offending parameter.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The callable has no documentation text at all.
    #[error(
        "function '{function}' has no documentation; a Google-style doc block is required. Example:\n\
         Add two numbers.\n\n\
         Args:\n    \
             a: First number\n    \
             b: Second number\n\n\
         Returns:\n    \
             int: Sum of the numbers"
    )]
    MissingDocumentation {
        /// Name of the undocumented function.
        function: String,
    },

    /// Documentation is present but has no `Args:` section marker.
    #[error("documentation for function '{function}' has no 'Args:' section")]
    MissingArgsSection {
        /// Name of the function whose doc block lacks the section.
        function: String,
    },

    /// A declared parameter has no description line in the `Args:` section.
    #[error("parameter '{parameter}' of function '{function}' has no description in the Args section")]
    MissingParameterDescription {
        /// Name of the function being compiled.
        function: String,
        /// Name of the parameter without a description.
        parameter: String,
    },

    /// An annotation could not be reduced to a known schema kind.
    #[error("cannot map annotation '{annotation}' to a schema type")]
    UnmappableType {
        /// Rendering of the offending annotation.
        annotation: String,
    },

    /// The assembled descriptor was rejected by the structural validator.
    #[error("tool descriptor validation failed: {0}")]
    Validation(String),
}

impl SchemaError {
    /// Creates a [`MissingDocumentation`](Self::MissingDocumentation).
    pub fn missing_documentation(function: impl Into<String>) -> Self {
        Self::MissingDocumentation {
            function: function.into(),
        }
    }

    /// Creates a [`MissingArgsSection`](Self::MissingArgsSection).
    pub fn missing_args_section(function: impl Into<String>) -> Self {
        Self::MissingArgsSection {
            function: function.into(),
        }
    }

    /// Creates a [`MissingParameterDescription`](Self::MissingParameterDescription).
    pub fn missing_parameter_description(
        function: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        Self::MissingParameterDescription {
            function: function.into(),
            parameter: parameter.into(),
        }
    }

    /// Creates an [`UnmappableType`](Self::UnmappableType).
    pub fn unmappable_type(annotation: impl ToString) -> Self {
        Self::UnmappableType {
            annotation: annotation.to_string(),
        }
    }

    /// Creates a [`Validation`](Self::Validation).
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
