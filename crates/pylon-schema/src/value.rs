//! Typed output values.
//!
//! Validation turns a raw payload into a [`TypedStruct`]: an ordered map
//! of field name to [`FieldValue`], with every value already coerced to
//! its declared [`FieldType`](crate::FieldType).

use crate::spec::FieldType;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A fully-typed field value produced by validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Nested validated structure.
    Struct(TypedStruct),
    /// Homogeneous list of values.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns a short name for the value's runtime type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Struct(_) => "structure",
            Self::List(_) => "list",
        }
    }

    /// Returns whether this value satisfies the given declared type.
    ///
    /// Used to check that field defaults are well-formed when a
    /// structure spec is compiled.
    #[must_use]
    pub fn satisfies(&self, ty: &FieldType) -> bool {
        match (self, ty) {
            (Self::Str(_), FieldType::String)
            | (Self::Int(_), FieldType::Integer)
            | (Self::Float(_), FieldType::Float)
            | (Self::Bool(_), FieldType::Boolean) => true,
            (Self::Str(s), FieldType::Enum(spec)) => spec.contains(s),
            (Self::Struct(value), FieldType::Structure(spec)) => {
                spec.fields().iter().all(|field| match value.get(field.name()) {
                    Some(v) => v.satisfies(field.field_type()),
                    None => !field.is_required(),
                })
            }
            (Self::List(items), FieldType::List(elem)) => {
                items.iter().all(|item| item.satisfies(elem))
            }
            _ => false,
        }
    }

    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value, if this is a float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested structure, if this is one.
    #[must_use]
    pub fn as_struct(&self) -> Option<&TypedStruct> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Converts this value into plain JSON.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Str(s) => serde_json::Value::String(s.clone()),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Value::from(*f),
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Struct(s) => s.to_json(),
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(FieldValue::to_json).collect())
            }
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Struct(s) => s.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// A validated structure: field name to typed value, in spec order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedStruct {
    fields: IndexMap<String, FieldValue>,
}

impl TypedStruct {
    /// Creates an empty typed struct.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field value, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Looks up a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the struct has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in insertion (spec) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts this struct into a plain JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl Serialize for TypedStruct {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{EnumSpec, FieldSpec, StructureSpec};

    #[test]
    fn test_satisfies_scalars() {
        assert!(FieldValue::Int(1).satisfies(&FieldType::Integer));
        assert!(FieldValue::Float(1.5).satisfies(&FieldType::Float));
        assert!(!FieldValue::Int(1).satisfies(&FieldType::Float));
        assert!(!FieldValue::Str("true".to_string()).satisfies(&FieldType::Boolean));
    }

    #[test]
    fn test_satisfies_enum() {
        let ty = FieldType::Enum(EnumSpec::new("Platform", ["instagram", "facebook"]));

        assert!(FieldValue::Str("instagram".to_string()).satisfies(&ty));
        assert!(!FieldValue::Str("google".to_string()).satisfies(&ty));
    }

    #[test]
    fn test_satisfies_structure() {
        let spec = StructureSpec::builder("Point")
            .field(FieldSpec::required("x", FieldType::Integer))
            .field(FieldSpec::optional("y", FieldType::Integer, FieldValue::Int(0)))
            .build()
            .unwrap();
        let ty = FieldType::Structure(spec);

        let mut full = TypedStruct::new();
        full.insert("x", FieldValue::Int(1));
        full.insert("y", FieldValue::Int(2));
        assert!(FieldValue::Struct(full).satisfies(&ty));

        let mut partial = TypedStruct::new();
        partial.insert("x", FieldValue::Int(1));
        assert!(FieldValue::Struct(partial).satisfies(&ty));

        let empty = TypedStruct::new();
        assert!(!FieldValue::Struct(empty).satisfies(&ty));
    }

    #[test]
    fn test_serialization_preserves_order() {
        let mut value = TypedStruct::new();
        value.insert("name", FieldValue::Str("radio".to_string()));
        value.insert("price", FieldValue::Float(19.99));
        value.insert("is_offer", FieldValue::Bool(false));

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            r#"{"name":"radio","price":19.99,"is_offer":false}"#
        );
    }

    #[test]
    fn test_to_json_nested() {
        let mut inner = TypedStruct::new();
        inner.insert("qty", FieldValue::Int(3));

        let mut outer = TypedStruct::new();
        outer.insert("items", FieldValue::List(vec![FieldValue::Struct(inner)]));

        assert_eq!(
            outer.to_json(),
            serde_json::json!({"items": [{"qty": 3}]})
        );
    }
}
