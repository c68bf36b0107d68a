//! Tutorial request handlers.
//!
//! Each handler is a pure function from already-decoded (and, where
//! applicable, already-validated) input to a JSON response body, or a
//! [`Failure`] raised for the boundary to translate. Handlers never
//! build transport responses themselves.

use crate::catalog::Catalog;
use http::StatusCode;
use pylon_envelope::{Failure, FailureResult};
use pylon_schema::{FieldValue, TypedStruct};
use serde_json::{json, Value};

/// The root greeting.
#[must_use]
pub fn hello() -> Value {
    json!({
        "status": 200,
        "message": "Hello Programmers"
    })
}

/// Echoes a path parameter and an optional query parameter back.
pub fn echo_item(item_id: i64, q: Option<&str>) -> FailureResult<Value> {
    Ok(json!({
        "item_id": item_id,
        "q": q,
    }))
}

/// Accepts a validated item payload.
///
/// # Errors
///
/// Raises a 400 application failure when the price is not positive.
pub fn create_item(item: &TypedStruct) -> FailureResult<Value> {
    let price = typed_field(item, "price", FieldValue::as_f64)?;
    if price <= 0.0 {
        return Err(Failure::application(
            StatusCode::BAD_REQUEST,
            "price must be > 0",
        ));
    }

    Ok(json!({
        "created": item.to_json(),
    }))
}

/// Accepts a validated order payload: a customer sub-structure plus a
/// list of line items.
///
/// # Errors
///
/// Raises a 400 application failure when any line item count is not
/// positive.
pub fn place_order(order: &TypedStruct) -> FailureResult<Value> {
    let customer = typed_field(order, "customer", FieldValue::as_struct)?;
    let customer_name = typed_field(customer, "name", FieldValue::as_str)?;
    let items = typed_field(order, "items", FieldValue::as_list)?;

    let mut total_units: i64 = 0;
    for item in items {
        let line = item.as_struct().ok_or_else(|| internal("items"))?;
        let count = typed_field(line, "count", FieldValue::as_i64)?;
        if count <= 0 {
            return Err(Failure::application(
                StatusCode::BAD_REQUEST,
                "count must be > 0",
            ));
        }
        total_units += count;
    }

    Ok(json!({
        "customer": customer_name,
        "lines": items.len(),
        "total_units": total_units,
    }))
}

/// Resolves a platform key to its metadata record.
pub fn platform_info(catalog: &Catalog, key: &str) -> FailureResult<Value> {
    let info = catalog.platform(key)?;
    Ok(json!({ "platform": info }))
}

/// Resolves a fruit key to its nickname.
pub fn fruit_nickname(catalog: &Catalog, key: &str) -> FailureResult<Value> {
    let nickname = catalog.fruit_nickname(key)?;
    Ok(json!({ "fruit": key, "nickname": nickname }))
}

/// The retired reporting endpoint; always raises a failure carrying an
/// operator note.
pub fn unavailable_report() -> FailureResult<Value> {
    Err(Failure::custom(
        StatusCode::BAD_REQUEST,
        "report generation is unavailable",
        "the reporting backend was retired; use the export endpoint instead",
    ))
}

/// Reads a field out of a validated struct.
///
/// Validation guarantees the field is present and typed; a miss here is
/// a spec/handler mismatch, reported as a 500 rather than a panic.
fn typed_field<'a, T>(
    value: &'a TypedStruct,
    name: &str,
    accessor: impl Fn(&'a FieldValue) -> Option<T>,
) -> FailureResult<T> {
    value
        .get(name)
        .and_then(accessor)
        .ok_or_else(|| internal(name))
}

fn internal(field: &str) -> Failure {
    Failure::application(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("validated payload missing typed field '{field}'"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylon_schema::{validate, FieldSpec, FieldType, StructureSpec};

    fn item_spec() -> StructureSpec {
        StructureSpec::builder("Item")
            .field(FieldSpec::required("name", FieldType::String))
            .field(FieldSpec::required("price", FieldType::Float))
            .field(FieldSpec::optional(
                "is_offer",
                FieldType::Boolean,
                FieldValue::Bool(false),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_hello_is_exact_tutorial_body() {
        assert_eq!(
            hello(),
            json!({"status": 200, "message": "Hello Programmers"})
        );
    }

    #[test]
    fn test_echo_item_without_query() {
        let body = echo_item(42, None).unwrap();
        assert_eq!(body, json!({"item_id": 42, "q": null}));
    }

    #[test]
    fn test_create_item_happy_path() {
        let typed = validate(&item_spec(), &json!({"name": "radio", "price": 19.99})).unwrap();
        let body = create_item(&typed).unwrap();
        assert_eq!(body["created"]["is_offer"], json!(false));
    }

    #[test]
    fn test_create_item_rejects_non_positive_price() {
        let typed = validate(&item_spec(), &json!({"name": "radio", "price": 0.0})).unwrap();
        let failure = create_item(&typed).unwrap_err();
        assert_eq!(failure.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(failure.to_string(), "price must be > 0");
    }

    #[test]
    fn test_unavailable_report_carries_operator_note() {
        let failure = unavailable_report().unwrap_err();
        assert!(matches!(failure, Failure::CustomApplication { .. }));
    }

    #[test]
    fn test_platform_info_unknown_key() {
        let catalog = Catalog::new();
        let failure = platform_info(&catalog, "myspace").unwrap_err();
        assert_eq!(failure.to_string(), "Invalid key myspace");
    }
}
