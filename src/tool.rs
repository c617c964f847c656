//! The tool descriptor model and its structural validator.
//!
//! [`Tool`] is the typed form of the wire contract consumed by model
//! runtimes. [`Tool::validate`] is the authoritative final gate for
//! every descriptor this crate hands out, whether compiled from a
//! signature or supplied as raw data.

use crate::error::SchemaError;
use crate::resolve::ResolvedKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A normalized tool descriptor presented to a language-model runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tool {
    /// Descriptor kind tag. Always `function`.
    #[serde(rename = "type")]
    pub kind: ToolType,
    /// The described function.
    pub function: ToolFunction,
}

/// Tag for the kind of tool being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    /// A callable function.
    Function,
}

/// The function section of a tool descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolFunction {
    /// Function name.
    pub name: String,
    /// Summary of what the function does.
    pub description: String,
    /// Parameter schema.
    pub parameters: ToolParameters,
    /// Schema kind of the return value, if annotated.
    #[serde(default)]
    pub return_type: Option<ResolvedKind>,
}

/// Object schema for a function's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolParameters {
    /// Schema type tag. Always `object`.
    #[serde(rename = "type")]
    pub kind: ObjectType,
    /// Per-parameter schemas, in declaration order.
    pub properties: IndexMap<String, PropertySchema>,
    /// Names of required parameters, in declaration order.
    pub required: Vec<String>,
}

/// Tag for the parameters object schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// JSON object.
    Object,
}

/// Schema fragment for a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySchema {
    /// Schema kind, a single name or an ordered list.
    #[serde(rename = "type")]
    pub kind: ResolvedKind,
    /// Human-authored description of the parameter.
    pub description: String,
}

impl Tool {
    /// Validates raw descriptor data into a [`Tool`].
    ///
    /// Runs strict deserialization against the wire contract, then the
    /// structural invariant checks of [`check`](Self::check).
    ///
    /// # Errors
    ///
    /// [`SchemaError::Validation`] describing the shape mismatch or the
    /// violated invariant.
    pub fn validate(value: serde_json::Value) -> Result<Self, SchemaError> {
        let tool: Self =
            serde_json::from_value(value).map_err(|err| SchemaError::validation(err.to_string()))?;
        tool.check()?;
        Ok(tool)
    }

    /// Checks the descriptor invariants: every required name refers to a
    /// declared property, and every property carries a non-empty
    /// description.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Validation`] naming the violated invariant.
    pub fn check(&self) -> Result<(), SchemaError> {
        let parameters = &self.function.parameters;
        for name in &parameters.required {
            if !parameters.properties.contains_key(name) {
                return Err(SchemaError::validation(format!(
                    "required parameter '{name}' of function '{}' is not among its properties",
                    self.function.name
                )));
            }
        }
        for (name, property) in &parameters.properties {
            if property.description.trim().is_empty() {
                return Err(SchemaError::validation(format!(
                    "parameter '{name}' of function '{}' has an empty description",
                    self.function.name
                )));
            }
        }
        Ok(())
    }
}
