//! Structure specifications.
//!
//! A [`StructureSpec`] describes the expected shape of an inbound payload:
//! an ordered set of named, typed fields, each either required or carrying
//! a pre-typed default. Specs are compiled once through
//! [`StructureSpecBuilder`] and reused across validations.
//!
//! # Example
//!
//! ```
//! use pylon_schema::{FieldSpec, FieldType, FieldValue, StructureSpec};
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
//! assert_eq!(spec.fields().len(), 3);
//! assert!(spec.get_field("price").is_some());
//! ```

use crate::value::FieldValue;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while compiling a [`StructureSpec`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// Two fields in the same structure share a name.
    #[error("duplicate field '{field}' in structure '{structure}'")]
    DuplicateField {
        /// The structure being built.
        structure: String,
        /// The repeated field name.
        field: String,
    },

    /// A field default does not satisfy the field's declared type.
    #[error("default for field '{field}' in structure '{structure}' does not satisfy type {expected}")]
    DefaultTypeMismatch {
        /// The structure being built.
        structure: String,
        /// The offending field name.
        field: String,
        /// Description of the declared type.
        expected: String,
    },
}

/// The declared type of a field.
///
/// This is a closed set: scalars, enumerated value sets, nested
/// structures, and homogeneous lists.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit float.
    Float,
    /// Boolean (canonical `true`/`false` tokens only when coercing).
    Boolean,
    /// Closed set of permitted string values.
    Enum(EnumSpec),
    /// Nested structure, validated recursively.
    Structure(StructureSpec),
    /// Homogeneous list of the given element type.
    List(Box<FieldType>),
}

impl FieldType {
    /// Returns a human-readable description of this type, used in
    /// validation error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Float => "float".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Enum(spec) => format!("one of {{{}}}", spec.members().join(", ")),
            Self::Structure(spec) => format!("structure {}", spec.name()),
            Self::List(elem) => format!("list of {}", elem.describe()),
        }
    }
}

/// A closed set of permitted scalar string values.
///
/// Membership is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpec {
    name: String,
    values: Vec<String>,
}

impl EnumSpec {
    /// Creates an enum spec from a name and its permitted values.
    #[must_use]
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the enum name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the permitted values, in declaration order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.values
    }

    /// Returns whether `value` is a member of the set (case-sensitive).
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// A single named, typed field within a [`StructureSpec`].
///
/// A field with no default is required; a field with a default is
/// optional, and the default must itself satisfy the declared type
/// (checked when the containing structure is built).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    ty: FieldType,
    default: Option<FieldValue>,
}

impl FieldSpec {
    /// Creates a required field.
    #[must_use]
    pub fn required(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    /// Creates an optional field with a pre-typed default value.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: FieldType, default: FieldValue) -> Self {
        Self {
            name: name.into(),
            ty,
            default: Some(default),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub fn field_type(&self) -> &FieldType {
        &self.ty
    }

    /// Returns the default value, if the field is optional.
    #[must_use]
    pub fn default(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }

    /// Returns whether this field is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A named, ordered collection of uniquely-named fields.
///
/// Field order affects only serialization of validated output; it has
/// no effect on validation semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureSpec {
    name: String,
    fields: Vec<FieldSpec>,
    field_index: HashMap<String, usize>,
}

impl StructureSpec {
    /// Creates a new structure spec builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> StructureSpecBuilder {
        StructureSpecBuilder::new(name)
    }

    /// Returns the structure name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.field_index.get(name).map(|&idx| &self.fields[idx])
    }
}

/// Builder for [`StructureSpec`] instances.
#[derive(Debug)]
pub struct StructureSpecBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl StructureSpecBuilder {
    /// Creates a new builder for a structure with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the structure.
    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds multiple fields to the structure.
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Builds the structure spec.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::DuplicateField`] if two fields share a name,
    /// or [`SpecError::DefaultTypeMismatch`] if an optional field's
    /// default does not satisfy its declared type.
    pub fn build(self) -> Result<StructureSpec, SpecError> {
        let mut field_index = HashMap::with_capacity(self.fields.len());

        for (idx, field) in self.fields.iter().enumerate() {
            if field_index.insert(field.name().to_string(), idx).is_some() {
                return Err(SpecError::DuplicateField {
                    structure: self.name,
                    field: field.name().to_string(),
                });
            }

            if let Some(default) = field.default() {
                if !default.satisfies(field.field_type()) {
                    return Err(SpecError::DefaultTypeMismatch {
                        structure: self.name,
                        field: field.name().to_string(),
                        expected: field.field_type().describe(),
                    });
                }
            }
        }

        Ok(StructureSpec {
            name: self.name,
            fields: self.fields,
            field_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_field_order() {
        let spec = StructureSpec::builder("Item")
            .field(FieldSpec::required("name", FieldType::String))
            .field(FieldSpec::required("price", FieldType::Float))
            .build()
            .unwrap();

        let names: Vec<&str> = spec.fields().iter().map(FieldSpec::name).collect();
        assert_eq!(names, vec!["name", "price"]);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = StructureSpec::builder("Item")
            .field(FieldSpec::required("name", FieldType::String))
            .field(FieldSpec::required("name", FieldType::Integer))
            .build();

        assert_eq!(
            result.unwrap_err(),
            SpecError::DuplicateField {
                structure: "Item".to_string(),
                field: "name".to_string(),
            }
        );
    }

    #[test]
    fn test_default_must_satisfy_type() {
        let result = StructureSpec::builder("Item")
            .field(FieldSpec::optional(
                "count",
                FieldType::Integer,
                FieldValue::Str("ten".to_string()),
            ))
            .build();

        assert!(matches!(
            result,
            Err(SpecError::DefaultTypeMismatch { ref field, .. }) if field == "count"
        ));
    }

    #[test]
    fn test_field_with_default_is_optional() {
        let required = FieldSpec::required("a", FieldType::String);
        let optional = FieldSpec::optional("b", FieldType::Integer, FieldValue::Int(1));

        assert!(required.is_required());
        assert!(!optional.is_required());
    }

    #[test]
    fn test_get_field() {
        let spec = StructureSpec::builder("Item")
            .field(FieldSpec::required("name", FieldType::String))
            .build()
            .unwrap();

        assert!(spec.get_field("name").is_some());
        assert!(spec.get_field("missing").is_none());
    }

    #[test]
    fn test_enum_membership_is_case_sensitive() {
        let spec = EnumSpec::new("Platform", ["instagram", "facebook", "google"]);

        assert!(spec.contains("instagram"));
        assert!(!spec.contains("Instagram"));
        assert!(!spec.contains("twitter"));
    }

    #[test]
    fn test_type_descriptions() {
        let platform = EnumSpec::new("Platform", ["instagram", "facebook", "google"]);

        assert_eq!(FieldType::Integer.describe(), "integer");
        assert_eq!(
            FieldType::Enum(platform).describe(),
            "one of {instagram, facebook, google}"
        );
        assert_eq!(
            FieldType::List(Box::new(FieldType::Float)).describe(),
            "list of float"
        );
    }
}
