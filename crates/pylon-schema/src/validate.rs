//! The validation engine.
//!
//! [`validate`] walks a compiled [`StructureSpec`] over a raw JSON
//! payload and produces either a fully-typed [`TypedStruct`] or the
//! complete list of per-field [`ValidationError`]s. Validation is total
//! and side-effect-free: it always terminates, never panics on payload
//! content, and touches no shared state, so it is safely callable from
//! any number of in-flight requests.
//!
//! Coercion failures are data, not control flow: the engine never
//! raises past its return value. The boundary layer decides whether a
//! non-empty error list becomes a client error response.
//!
//! # Example
//!
//! ```
//! use pylon_schema::{validate, FieldSpec, FieldType, FieldValue, StructureSpec};
//! use serde_json::json;
//!
//! let spec = StructureSpec::builder("Item")
//!     .field(FieldSpec::required("name", FieldType::String))
//!     .field(FieldSpec::required("price", FieldType::Float))
//!     .field(FieldSpec::optional(
//!         "is_offer",
//!         FieldType::Boolean,
//!         FieldValue::Bool(false),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let typed = validate(&spec, &json!({"name": "radio", "price": "19.99"})).unwrap();
//! assert_eq!(typed.get("price").unwrap().as_f64(), Some(19.99));
//! assert_eq!(typed.get("is_offer").unwrap().as_bool(), Some(false));
//! ```

use crate::error::ValidationError;
use crate::spec::{FieldType, StructureSpec};
use crate::value::{FieldValue, TypedStruct};
use serde_json::Value;

/// Validates a raw JSON payload against a structure spec.
///
/// On success every required field is present and correctly typed and
/// every optional-absent field carries its spec default. On failure the
/// returned list contains one entry per offending field, with dotted
/// paths into nested structures and lists.
///
/// # Errors
///
/// Returns the full list of per-field validation errors.
pub fn validate(spec: &StructureSpec, raw: &Value) -> Result<TypedStruct, Vec<ValidationError>> {
    let Some(object) = raw.as_object() else {
        return Err(vec![ValidationError::type_mismatch(
            "",
            raw.clone(),
            format!("structure {}", spec.name()),
            format!("expected object, got {}", json_type_name(raw)),
        )]);
    };
    validate_fields(spec, object, "")
}

/// Validates query-string style key/value pairs against a structure spec.
///
/// Every raw value arrives as a string; the coercion rules are identical
/// to [`validate`].
///
/// # Errors
///
/// Returns the full list of per-field validation errors.
pub fn validate_query(
    spec: &StructureSpec,
    pairs: &[(&str, &str)],
) -> Result<TypedStruct, Vec<ValidationError>> {
    let object: serde_json::Map<String, Value> = pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    validate_fields(spec, &object, "")
}

fn validate_fields(
    spec: &StructureSpec,
    object: &serde_json::Map<String, Value>,
    prefix: &str,
) -> Result<TypedStruct, Vec<ValidationError>> {
    let mut typed = TypedStruct::new();
    let mut errors = Vec::new();

    for field in spec.fields() {
        let path = join_path(prefix, field.name());
        match object.get(field.name()) {
            None => {
                if let Some(default) = field.default() {
                    // Defaults are pre-typed; no coercion attempted.
                    typed.insert(field.name(), default.clone());
                } else {
                    errors.push(ValidationError::missing(path, field.field_type().describe()));
                }
            }
            Some(raw) => match coerce(raw, field.field_type(), &path) {
                Ok(value) => typed.insert(field.name(), value),
                Err(mut field_errors) => errors.append(&mut field_errors),
            },
        }
    }

    if errors.is_empty() {
        Ok(typed)
    } else {
        Err(errors)
    }
}

fn coerce(raw: &Value, ty: &FieldType, path: &str) -> Result<FieldValue, Vec<ValidationError>> {
    match ty {
        FieldType::String => match raw {
            Value::String(s) => Ok(FieldValue::Str(s.clone())),
            other => Err(vec![mismatch(path, other, ty)]),
        },
        FieldType::Integer => coerce_integer(raw, path),
        FieldType::Float => coerce_float(raw, path),
        FieldType::Boolean => coerce_boolean(raw, path),
        FieldType::Enum(spec) => match raw {
            Value::String(s) if spec.contains(s) => Ok(FieldValue::Str(s.clone())),
            other => Err(vec![ValidationError::type_mismatch(
                path,
                other.clone(),
                ty.describe(),
                format!("value {other} is not {}", ty.describe()),
            )]),
        },
        FieldType::Structure(spec) => match raw.as_object() {
            Some(object) => validate_fields(spec, object, path).map(FieldValue::Struct),
            None => Err(vec![mismatch(path, raw, ty)]),
        },
        FieldType::List(elem) => match raw.as_array() {
            Some(items) => {
                let mut values = Vec::with_capacity(items.len());
                let mut errors = Vec::new();
                for (idx, item) in items.iter().enumerate() {
                    let item_path = join_path(path, &idx.to_string());
                    match coerce(item, elem, &item_path) {
                        Ok(value) => values.push(value),
                        Err(mut item_errors) => errors.append(&mut item_errors),
                    }
                }
                if errors.is_empty() {
                    Ok(FieldValue::List(values))
                } else {
                    Err(errors)
                }
            }
            None => Err(vec![mismatch(path, raw, ty)]),
        },
    }
}

fn coerce_integer(raw: &Value, path: &str) -> Result<FieldValue, Vec<ValidationError>> {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(FieldValue::Int(i));
            }
            if let Some(f) = n.as_f64() {
                if let Some(i) = integral(f) {
                    return Ok(FieldValue::Int(i));
                }
            }
            Err(vec![ValidationError::type_mismatch(
                path,
                raw.clone(),
                "integer",
                format!("expected integer, got non-integral number {raw}"),
            )])
        }
        Value::String(literal) => match parse_numeric(literal) {
            Ok(Parsed::Int(i)) => Ok(FieldValue::Int(i)),
            // The fallback parsed a decimal-point literal as float; an
            // integer field only accepts it when integral.
            Ok(Parsed::Float(f)) => integral(f).map(FieldValue::Int).ok_or_else(|| {
                vec![ValidationError::type_mismatch(
                    path,
                    raw.clone(),
                    "integer",
                    format!("expected integer, got float value {f}"),
                )]
            }),
            Err(reason) => Err(vec![ValidationError::type_mismatch(
                path,
                raw.clone(),
                "integer",
                format!("cannot coerce \"{literal}\" to integer: {reason}"),
            )]),
        },
        other => Err(vec![mismatch(path, other, &FieldType::Integer)]),
    }
}

fn coerce_float(raw: &Value, path: &str) -> Result<FieldValue, Vec<ValidationError>> {
    match raw {
        Value::Number(n) => n.as_f64().map(FieldValue::Float).ok_or_else(|| {
            vec![mismatch(path, raw, &FieldType::Float)]
        }),
        Value::String(literal) => match parse_numeric(literal) {
            Ok(Parsed::Float(f)) => Ok(FieldValue::Float(f)),
            Ok(Parsed::Int(i)) => Ok(FieldValue::Float(i as f64)),
            Err(reason) => Err(vec![ValidationError::type_mismatch(
                path,
                raw.clone(),
                "float",
                format!("cannot coerce \"{literal}\" to float: {reason}"),
            )]),
        },
        other => Err(vec![mismatch(path, other, &FieldType::Float)]),
    }
}

fn coerce_boolean(raw: &Value, path: &str) -> Result<FieldValue, Vec<ValidationError>> {
    match raw {
        Value::Bool(b) => Ok(FieldValue::Bool(*b)),
        Value::String(s) if s == "true" => Ok(FieldValue::Bool(true)),
        Value::String(s) if s == "false" => Ok(FieldValue::Bool(false)),
        Value::String(s) => Err(vec![ValidationError::type_mismatch(
            path,
            raw.clone(),
            "boolean",
            format!("ambiguous boolean literal \"{s}\", expected \"true\" or \"false\""),
        )]),
        other => Err(vec![mismatch(path, other, &FieldType::Boolean)]),
    }
}

enum Parsed {
    Int(i64),
    Float(f64),
}

/// Numeric fallback policy: a literal containing a decimal point is
/// parsed as float, anything else as integer. The underlying parse
/// failure reason is preserved for the error message.
fn parse_numeric(literal: &str) -> Result<Parsed, String> {
    if literal.contains('.') {
        literal
            .parse::<f64>()
            .map(Parsed::Float)
            .map_err(|e| e.to_string())
    } else {
        literal
            .parse::<i64>()
            .map(Parsed::Int)
            .map_err(|e| e.to_string())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral(f: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, one past the largest i64, so the
    // upper bound must stay exclusive or the cast saturates silently.
    if f.is_finite() && f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

fn mismatch(path: &str, raw: &Value, ty: &FieldType) -> ValidationError {
    ValidationError::type_mismatch(
        path,
        raw.clone(),
        ty.describe(),
        format!("expected {}, got {}", ty.describe(), json_type_name(raw)),
    )
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Returns a human-readable name for a JSON value type.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
