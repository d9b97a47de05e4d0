//! Shape checker.
//!
//! Walks the whole value, collecting every violation instead of stopping at
//! the first one, and builds the canonical value handed to serde:
//! - optional fields set to `null` are dropped,
//! - undeclared keys of lenient objects are dropped,
//! - a union discriminator authored under its alias is rewritten to the tag.

use super::shape::{ObjectShape, Shape, UnionShape};
use super::violation::{FieldPath, Violation, ViolationKind};
use serde_json::{Map, Value};

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(shape: &Shape, value: &Value, path: &FieldPath, out: &mut Vec<Violation>) {
    out.push(Violation::new(
        path.clone(),
        ViolationKind::WrongType {
            expected: shape.type_name(),
            found: json_type_name(value),
        },
    ));
}

pub(crate) fn check(
    shape: &Shape,
    value: &Value,
    path: &FieldPath,
    out: &mut Vec<Violation>,
) -> Value {
    match (shape, value) {
        (Shape::Text, Value::String(_))
        | (Shape::Bool, Value::Bool(_))
        | (Shape::Number, Value::Number(_)) => value.clone(),
        (Shape::List(item), Value::Array(items)) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| check(item, v, &path.index(i), out))
                .collect(),
        ),
        (Shape::Object(object), Value::Object(map)) => {
            Value::Object(check_object(object, map, path, None, out))
        }
        (Shape::Union(union), Value::Object(map)) => check_union(union, map, path, out),
        _ => {
            wrong_type(shape, value, path, out);
            value.clone()
        }
    }
}

fn check_object(
    object: &ObjectShape,
    map: &Map<String, Value>,
    path: &FieldPath,
    tag_key: Option<&str>,
    out: &mut Vec<Violation>,
) -> Map<String, Value> {
    let mut canonical = Map::new();

    for field in &object.fields {
        let field_path = path.key(field.name);
        match map.get(field.name) {
            None => {
                if field.required {
                    out.push(Violation::new(field_path, ViolationKind::Missing));
                }
            }
            Some(Value::Null) if !field.required => {}
            Some(value) => {
                let checked = check(&field.shape, value, &field_path, out);
                canonical.insert(field.name.to_string(), checked);
            }
        }
    }

    if object.strict {
        for key in map.keys() {
            if Some(key.as_str()) == tag_key || object.field(key).is_some() {
                continue;
            }
            out.push(Violation::new(path.key(key), ViolationKind::UnknownKey));
        }
    }

    canonical
}

fn check_union(
    union: &UnionShape,
    map: &Map<String, Value>,
    path: &FieldPath,
    out: &mut Vec<Violation>,
) -> Value {
    let tagged = map
        .get(union.tag)
        .map(|value| (union.tag, value))
        .or_else(|| {
            union
                .alias
                .and_then(|alias| map.get(alias).map(|value| (alias, value)))
        });

    let Some((tag_key, tag_value)) = tagged else {
        out.push(Violation::new(
            path.clone(),
            ViolationKind::MissingTag { tag: union.tag },
        ));
        return Value::Object(map.clone());
    };

    let tag_path = path.key(tag_key);
    let Value::String(discriminator) = tag_value else {
        wrong_type(&Shape::Text, tag_value, &tag_path, out);
        return Value::Object(map.clone());
    };

    let Some(variant) = union.variant_for(discriminator) else {
        out.push(Violation::new(
            tag_path,
            ViolationKind::UnknownVariant {
                found: discriminator.to_string(),
                expected: union.variant_names(),
            },
        ));
        return Value::Object(map.clone());
    };

    let mut canonical = check_object(variant, map, path, Some(tag_key), out);
    canonical.insert(union.tag.to_string(), Value::String(discriminator.clone()));
    Value::Object(canonical)
}
