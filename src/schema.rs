use jsonschema::{
    error::{TypeKind, ValidationErrorKind},
    paths::PathChunk,
    Draft, JSONSchema, ValidationError,
};
use schemars::{schema_for, JsonSchema};
use serde_json::Value;

/// A payload type with a compiled JSON schema attached.
///
/// The schema is generated from the type with [`schemars`] and evaluated
/// with [`jsonschema`], so presence and type checks run against the raw
/// JSON document before deserialization.
pub trait JsonValidate: JsonSchema {
    /// Returns the schema compiled for this payload type.
    fn compiled_schema() -> &'static JSONSchema;

    /// Validates `value`, collecting every violation message.
    fn validate_value(value: &Value) -> Result<(), Vec<String>> {
        match Self::compiled_schema().validate(value) {
            Ok(()) => Ok(()),
            Err(errors) => Err(errors.map(|err| violation_message(&err)).collect()),
        }
    }
}

/// Compiles the generated schema for `T`.
///
/// Panics if the generated schema is not a valid draft-7 schema, which is a
/// bug in the payload type definition.
pub fn compile<T: JsonSchema>() -> JSONSchema {
    let schema = serde_json::to_value(schema_for!(T)).expect("Schema is not serializable");

    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Generated schema is invalid")
}

/// Formats a violation in the `instance…` convention the API clients parse,
/// e.g. `instance requires property "year"` and
/// `instance.year is not of a type(s) integer`.
fn violation_message(err: &ValidationError) -> String {
    match &err.kind {
        ValidationErrorKind::Required { property } => {
            format!("{} requires property {property}", instance_path(err))
        }
        ValidationErrorKind::Type { kind } => {
            let expected = match kind {
                TypeKind::Single(primitive_type) => primitive_type.to_string(),
                TypeKind::Multiple(primitive_types) => primitive_types
                    .into_iter()
                    .map(|primitive_type| primitive_type.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            };

            format!("{} is not of a type(s) {expected}", instance_path(err))
        }
        _ => err.to_string(),
    }
}

fn instance_path(err: &ValidationError) -> String {
    let mut path = String::from("instance");

    for chunk in err.instance_path.iter() {
        match chunk {
            PathChunk::Property(property) => {
                path.push('.');
                path.push_str(property);
            }
            PathChunk::Index(index) => {
                path.push_str(&format!("[{index}]"));
            }
            PathChunk::Keyword(_) => {}
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use serde_json::json;

    use super::*;

    #[derive(Debug, JsonSchema)]
    #[allow(dead_code)]
    struct Payload {
        name: String,
        count: i32,
    }

    impl JsonValidate for Payload {
        fn compiled_schema() -> &'static JSONSchema {
            static SCHEMA: LazyLock<JSONSchema> = LazyLock::new(compile::<Payload>);

            &SCHEMA
        }
    }

    #[test]
    fn valid_payload_passes() {
        Payload::validate_value(&json!({"name": "a", "count": 3}))
            .expect("Payload matches the schema");
    }

    #[test]
    fn missing_property_message() {
        let violations =
            Payload::validate_value(&json!({"count": 3})).expect_err("name is missing");

        assert_eq!(violations, vec![r#"instance requires property "name""#]);
    }

    #[test]
    fn wrong_type_message() {
        let violations = Payload::validate_value(&json!({"name": "a", "count": "3"}))
            .expect_err("count is a string");

        assert_eq!(
            violations,
            vec!["instance.count is not of a type(s) integer"]
        );
    }

    #[test]
    fn every_violation_is_collected() {
        let violations =
            Payload::validate_value(&json!({"count": "3"})).expect_err("two violations");

        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&r#"instance requires property "name""#.to_string()));
        assert!(violations.contains(&"instance.count is not of a type(s) integer".to_string()));
    }
}
