//! The compiler from [`FunctionSignature`] to [`Tool`].

use crate::docstring::DocBlock;
use crate::error::SchemaError;
use crate::resolve::{is_optional, resolve};
use crate::signature::FunctionSignature;
use crate::tool::Tool;
use serde_json::json;
use tracing::trace;

/// Compiles a function signature into a validated tool descriptor.
///
/// Parses the Google-style doc block, then walks the declared parameters
/// in declaration order, building `properties` and `required` in the
/// same pass so property order always matches declaration order. A
/// parameter is required unless its annotation is optional (a union with
/// the absence marker). A non-absent return annotation resolves into
/// `return_type`. The assembled descriptor goes through
/// [`Tool::validate`] as the final gate.
///
/// # Errors
///
/// Fails fast with the first of: [`SchemaError::MissingDocumentation`],
/// [`SchemaError::MissingArgsSection`],
/// [`SchemaError::MissingParameterDescription`] naming the parameter,
/// [`SchemaError::UnmappableType`] naming the annotation, or
/// [`SchemaError::Validation`] from the final gate. No partial
/// descriptor is ever produced.
pub fn compile(function: &FunctionSignature) -> Result<Tool, SchemaError> {
    let block = DocBlock::parse(function.name(), function.doc().unwrap_or(""))?;

    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();
    for (name, annotation) in function.params() {
        let kind = resolve(annotation)?;
        let description = block.param_description(name).ok_or_else(|| {
            SchemaError::missing_parameter_description(function.name(), name)
        })?;
        properties.insert(
            name.to_string(),
            json!({ "type": kind, "description": description }),
        );
        if !is_optional(annotation) {
            required.push(name.to_string());
        }
    }

    let return_type = match function.return_annotation() {
        Some(annotation) if !annotation.is_absent() => Some(resolve(annotation)?),
        _ => None,
    };

    let descriptor = json!({
        "type": "function",
        "function": {
            "name": function.name(),
            "description": block.summary(),
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
            "return_type": return_type,
        }
    });

    trace!(function = function.name(), "compiled tool descriptor");
    Tool::validate(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use crate::resolve::{ResolvedKind, SchemaKind};

    fn weather_fn() -> FunctionSignature {
        FunctionSignature::new("get_weather")
            .with_doc(
                "Get the current weather for a city.\n\
                 \n\
                 Args:\n\
                 \x20   city: Name of the city\n\
                 \x20   units (str): Temperature units, optional\n\
                 \n\
                 Returns:\n\
                 \x20   str: A weather report\n",
            )
            .param("city", Annotation::Str)
            .param(
                "units",
                Annotation::Union(vec![Annotation::Str, Annotation::None]),
            )
            .returns(Annotation::Str)
    }

    #[test]
    fn compiles_a_documented_function() {
        let tool = compile(&weather_fn()).unwrap();
        assert_eq!(tool.function.name, "get_weather");
        assert_eq!(
            tool.function.description,
            "Get the current weather for a city."
        );
        assert_eq!(tool.function.parameters.required, ["city"]);
        assert_eq!(
            tool.function.return_type,
            Some(ResolvedKind::Single(SchemaKind::String))
        );

        let names: Vec<&String> = tool.function.parameters.properties.keys().collect();
        assert_eq!(names, ["city", "units"]);
        assert_eq!(
            tool.function.parameters.properties["units"].description,
            "Temperature units, optional"
        );
    }

    #[test]
    fn undocumented_function_fails() {
        let sig = FunctionSignature::new("bare").param("a", Annotation::Int);
        assert!(matches!(
            compile(&sig),
            Err(SchemaError::MissingDocumentation { function }) if function == "bare"
        ));
    }

    #[test]
    fn doc_without_args_section_fails() {
        let sig = FunctionSignature::new("f")
            .with_doc("Only a summary.")
            .param("a", Annotation::Int);
        assert!(matches!(
            compile(&sig),
            Err(SchemaError::MissingArgsSection { .. })
        ));
    }

    #[test]
    fn undescribed_parameter_fails_with_its_name() {
        let sig = FunctionSignature::new("f")
            .with_doc("Doc.\n\nArgs:\n    a: described\n")
            .param("a", Annotation::Int)
            .param("b", Annotation::Str);
        assert!(matches!(
            compile(&sig),
            Err(SchemaError::MissingParameterDescription { parameter, .. }) if parameter == "b"
        ));
    }

    #[test]
    fn unmappable_annotation_propagates() {
        let sig = FunctionSignature::new("f")
            .with_doc("Doc.\n\nArgs:\n    a: described\n")
            .param("a", Annotation::Name("Widget".into()));
        assert!(matches!(compile(&sig), Err(SchemaError::UnmappableType { .. })));
    }

    #[test]
    fn absent_return_annotation_leaves_return_type_null() {
        let sig = FunctionSignature::new("f")
            .with_doc("Doc.\n\nArgs:\n    a: described\n")
            .param("a", Annotation::Int)
            .returns(Annotation::None);
        let tool = compile(&sig).unwrap();
        assert_eq!(tool.function.return_type, None);
    }

    #[test]
    fn compilation_is_idempotent() {
        let sig = weather_fn();
        assert_eq!(compile(&sig).unwrap(), compile(&sig).unwrap());
    }
}
