//! Normalization of heterogeneous tool inputs.
//!
//! Callers hand over a mixed bag of already-built descriptors, raw
//! descriptor data, and function signatures; [`normalize_tools`] turns
//! the lot into one uniform ordered sequence of validated [`Tool`]s.

use crate::compile::compile;
use crate::error::SchemaError;
use crate::signature::FunctionSignature;
use crate::tool::Tool;
use tracing::debug;

/// One tool-like input, classified at ingestion.
#[derive(Debug, Clone)]
pub enum ToolInput {
    /// An already-built descriptor. Re-checked, not re-compiled.
    Tool(Tool),
    /// Raw descriptor data, forwarded to [`Tool::validate`].
    Value(serde_json::Value),
    /// A function signature, routed through [`compile`].
    Function(FunctionSignature),
}

impl From<Tool> for ToolInput {
    fn from(tool: Tool) -> Self {
        Self::Tool(tool)
    }
}

impl From<serde_json::Value> for ToolInput {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value)
    }
}

impl From<FunctionSignature> for ToolInput {
    fn from(signature: FunctionSignature) -> Self {
        Self::Function(signature)
    }
}

/// Normalizes an optional, ordered collection of tool-like inputs into
/// validated descriptors.
///
/// `None` and the empty collection both yield an empty sequence without
/// error. Output order matches input order.
///
/// # Errors
///
/// The first failing item aborts the whole batch and surfaces its
/// [`SchemaError`]; there is no partial or best-effort result. Tool sets
/// are small and author-controlled, so a hard stop beats silently
/// dropping an item.
pub fn normalize_tools(tools: Option<Vec<ToolInput>>) -> Result<Vec<Tool>, SchemaError> {
    let Some(tools) = tools else {
        return Ok(Vec::new());
    };
    debug!(count = tools.len(), "normalizing tool inputs");

    tools
        .into_iter()
        .map(|input| match input {
            ToolInput::Function(signature) => compile(&signature),
            ToolInput::Value(value) => Tool::validate(value),
            ToolInput::Tool(tool) => {
                tool.check()?;
                Ok(tool)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use serde_json::json;

    fn echo_fn() -> FunctionSignature {
        FunctionSignature::new("echo")
            .with_doc("Echo a message.\n\nArgs:\n    message: Text to echo\n")
            .param("message", Annotation::Str)
    }

    fn raw_descriptor() -> serde_json::Value {
        json!({
            "type": "function",
            "function": {
                "name": "ping",
                "description": "Ping.",
                "parameters": { "type": "object", "properties": {}, "required": [] },
                "return_type": null
            }
        })
    }

    #[test]
    fn absent_and_empty_inputs_yield_empty_output() {
        assert!(normalize_tools(None).unwrap().is_empty());
        assert!(normalize_tools(Some(Vec::new())).unwrap().is_empty());
    }

    #[test]
    fn mixed_inputs_keep_their_order() {
        let tools = normalize_tools(Some(vec![
            echo_fn().into(),
            raw_descriptor().into(),
        ]))
        .unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].function.name, "echo");
        assert_eq!(tools[1].function.name, "ping");
    }

    #[test]
    fn prebuilt_descriptor_passes_through() {
        let tool = Tool::validate(raw_descriptor()).unwrap();
        let tools = normalize_tools(Some(vec![tool.clone().into()])).unwrap();
        assert_eq!(tools, vec![tool]);
    }

    #[test]
    fn one_bad_item_fails_the_batch() {
        let result = normalize_tools(Some(vec![
            echo_fn().into(),
            json!({ "type": "function" }).into(),
        ]));
        assert!(matches!(result, Err(SchemaError::Validation(_))));
    }

    #[test]
    fn bad_signature_fails_the_batch() {
        let undocumented = FunctionSignature::new("bare").param("a", Annotation::Int);
        let result = normalize_tools(Some(vec![raw_descriptor().into(), undocumented.into()]));
        assert!(matches!(
            result,
            Err(SchemaError::MissingDocumentation { .. })
        ));
    }
}
