//! The service context and boundary contract.
//!
//! [`Service`] is the explicit context object that replaces the
//! original's shared global instance: it owns the configuration, the
//! lookup catalogs, and the structure specs, each compiled once at
//! assembly time and reused across requests. The `handle_*` methods
//! apply the boundary contract end to end:
//!
//! - the raw payload is validated against the applicable spec; a
//!   non-empty error list fails the request with status 422 and body
//!   `{"detail": [...]}`;
//! - a [`Failure`] raised by handler logic is translated into its
//!   envelope and returned with the envelope's status code;
//! - a success becomes a 200 response with the handler's body.
//!
//! The context holds no mutable state, so one `Service` is safely
//! shared by any number of in-flight requests.

use crate::catalog::Catalog;
use crate::config::ServiceConfig;
use crate::handlers;
use http::StatusCode;
use pylon_envelope::{translate, Failure, FailureResult};
use pylon_schema::{
    validate, validate_query, EnumSpec, FieldSpec, FieldType, FieldValue, SpecError, StructureSpec,
    TypedStruct,
};
use serde_json::Value;

/// A complete response: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: StatusCode,
    /// JSON response body.
    pub body: Value,
}

impl Response {
    /// Creates a 200 response with the given body.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

/// The assembled service context.
#[derive(Debug, Clone)]
pub struct Service {
    config: ServiceConfig,
    catalog: Catalog,
    item_spec: StructureSpec,
    order_spec: StructureSpec,
    list_params_spec: StructureSpec,
}

impl Service {
    /// Assembles a service from the given configuration, compiling all
    /// structure specs once.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if a spec is malformed; this is a
    /// programming error caught at assembly time, not a request-time
    /// condition.
    pub fn new(config: ServiceConfig) -> Result<Self, SpecError> {
        let item_spec = StructureSpec::builder("Item")
            .field(FieldSpec::required("name", FieldType::String))
            .field(FieldSpec::required("price", FieldType::Float))
            .field(FieldSpec::optional(
                "is_offer",
                FieldType::Boolean,
                FieldValue::Bool(false),
            ))
            .field(FieldSpec::optional(
                "tags",
                FieldType::List(Box::new(FieldType::String)),
                FieldValue::List(Vec::new()),
            ))
            .build()?;

        let customer_spec = StructureSpec::builder("Customer")
            .field(FieldSpec::required("name", FieldType::String))
            .field(FieldSpec::optional(
                "platform",
                FieldType::Enum(EnumSpec::new(
                    "Platform",
                    ["instagram", "facebook", "google"],
                )),
                FieldValue::Str("google".to_string()),
            ))
            .build()?;

        let line_item_spec = StructureSpec::builder("LineItem")
            .field(FieldSpec::required("sku", FieldType::String))
            .field(FieldSpec::required("count", FieldType::Integer))
            .build()?;

        let order_spec = StructureSpec::builder("Order")
            .field(FieldSpec::required(
                "customer",
                FieldType::Structure(customer_spec),
            ))
            .field(FieldSpec::required(
                "items",
                FieldType::List(Box::new(FieldType::Structure(line_item_spec))),
            ))
            .build()?;

        let list_params_spec = StructureSpec::builder("ListParams")
            .field(FieldSpec::optional(
                "q",
                FieldType::String,
                FieldValue::Str(String::new()),
            ))
            .field(FieldSpec::optional(
                "limit",
                FieldType::Integer,
                FieldValue::Int(10),
            ))
            .build()?;

        Ok(Self {
            config,
            catalog: Catalog::new(),
            item_spec,
            order_spec,
            list_params_spec,
        })
    }

    /// Assembles a service with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if a spec is malformed.
    pub fn with_defaults() -> Result<Self, SpecError> {
        Self::new(ServiceConfig::default())
    }

    /// Returns the service configuration.
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the lookup catalogs.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// `GET /` - the root greeting.
    #[must_use]
    pub fn handle_hello(&self) -> Response {
        self.run("hello", Ok(handlers::hello()))
    }

    /// `GET /items/{item_id}` - echo a path parameter and optional query.
    #[must_use]
    pub fn handle_echo_item(&self, item_id: i64, q: Option<&str>) -> Response {
        self.run("echo_item", handlers::echo_item(item_id, q))
    }

    /// `GET /items` - list parameters validated from the query string.
    #[must_use]
    pub fn handle_list_items(&self, query_pairs: &[(&str, &str)]) -> Response {
        let result = self
            .validate_query_pairs(&self.list_params_spec, query_pairs)
            .map(|params| params.to_json());
        self.run("list_items", result)
    }

    /// `POST /items` - validate and accept an item payload.
    #[must_use]
    pub fn handle_create_item(&self, payload: &Value) -> Response {
        let result = self
            .validate_payload(&self.item_spec, payload)
            .and_then(|item| handlers::create_item(&item));
        self.run("create_item", result)
    }

    /// `POST /orders` - validate and accept a nested order payload.
    #[must_use]
    pub fn handle_place_order(&self, payload: &Value) -> Response {
        let result = self
            .validate_payload(&self.order_spec, payload)
            .and_then(|order| handlers::place_order(&order));
        self.run("place_order", result)
    }

    /// `GET /platforms/{key}` - platform metadata lookup.
    #[must_use]
    pub fn handle_platform(&self, key: &str) -> Response {
        self.run("platform_info", handlers::platform_info(&self.catalog, key))
    }

    /// `GET /fruits/{key}` - fruit nickname lookup.
    #[must_use]
    pub fn handle_fruit(&self, key: &str) -> Response {
        self.run("fruit_nickname", handlers::fruit_nickname(&self.catalog, key))
    }

    /// `GET /reports` - the retired reporting endpoint.
    #[must_use]
    pub fn handle_report(&self) -> Response {
        self.run("report", handlers::unavailable_report())
    }

    /// Runs validation for a JSON payload, folding the error list into
    /// a [`Failure::Validation`].
    fn validate_payload(
        &self,
        spec: &StructureSpec,
        payload: &Value,
    ) -> FailureResult<TypedStruct> {
        validate(spec, payload).map_err(Failure::validation)
    }

    /// Runs validation for query-string pairs.
    fn validate_query_pairs(
        &self,
        spec: &StructureSpec,
        pairs: &[(&str, &str)],
    ) -> FailureResult<TypedStruct> {
        validate_query(spec, pairs).map_err(Failure::validation)
    }

    /// Terminal step for every handler: success becomes a 200 response,
    /// any failure is translated into its envelope.
    fn run(&self, handler: &'static str, result: FailureResult<Value>) -> Response {
        match result {
            Ok(body) => {
                tracing::info!(
                    handler,
                    http.status_code = StatusCode::OK.as_u16(),
                    service.name = %self.config.service_name,
                    "request handled"
                );
                Response::ok(body)
            }
            Err(failure) => {
                let envelope = translate(&failure);
                tracing::warn!(
                    handler,
                    http.status_code = envelope.status.as_u16(),
                    failure_kind = ?failure.kind(),
                    service.name = %self.config.service_name,
                    "request failed"
                );
                Response {
                    status: envelope.status,
                    body: envelope.body,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> Service {
        Service::with_defaults().unwrap()
    }

    #[test]
    fn test_hello() {
        let response = service().handle_hello();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            json!({"status": 200, "message": "Hello Programmers"})
        );
    }

    #[test]
    fn test_create_item_valid() {
        let response = service().handle_create_item(&json!({
            "name": "radio",
            "price": "19.99"
        }));

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["created"]["price"], json!(19.99));
        assert_eq!(response.body["created"]["tags"], json!([]));
    }

    #[test]
    fn test_shape_failure_is_422_detail_list() {
        let response = service().handle_create_item(&json!({"price": "abc"}));

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        let detail = response.body["detail"].as_array().unwrap();
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0]["path"], "name");
        assert_eq!(detail[1]["path"], "price");
        assert!(detail[1]["message"]
            .as_str()
            .unwrap()
            .contains("invalid digit found in string"));
    }

    #[test]
    fn test_semantic_failure_is_400_detail_string() {
        let response = service().handle_create_item(&json!({
            "name": "radio",
            "price": -1.0
        }));

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!({"detail": "price must be > 0"}));
    }

    #[test]
    fn test_order_nested_error_path() {
        let response = service().handle_place_order(&json!({
            "customer": {"name": "Ada"},
            "items": [
                {"sku": "a-1", "count": 1},
                {"sku": "a-2", "count": "many"}
            ]
        }));

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body["detail"][0]["path"], "items.1.count");
    }

    #[test]
    fn test_order_happy_path_applies_enum_default() {
        let response = service().handle_place_order(&json!({
            "customer": {"name": "Ada"},
            "items": [{"sku": "a-1", "count": "2"}]
        }));

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["total_units"], json!(2));
    }

    #[test]
    fn test_order_count_rule() {
        let response = service().handle_place_order(&json!({
            "customer": {"name": "Ada"},
            "items": [{"sku": "a-1", "count": 0}]
        }));

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!({"detail": "count must be > 0"}));
    }

    #[test]
    fn test_unknown_platform_key_contract() {
        let response = service().handle_platform("twitter");

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!({"detail": "Invalid key twitter"}));
    }

    #[test]
    fn test_report_custom_envelope() {
        let response = service().handle_report();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["message"], json!("Something went wrong!"));
        assert_eq!(
            response.body["detail"],
            json!("report generation is unavailable")
        );
        assert!(response.body["custom_message"].is_string());
    }

    #[test]
    fn test_list_items_query_defaults() {
        let response = service().handle_list_items(&[]);
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({"q": "", "limit": 10}));

        let response = service().handle_list_items(&[("limit", "25"), ("q", "radio")]);
        assert_eq!(response.body, json!({"q": "radio", "limit": 25}));
    }

    #[test]
    fn test_list_items_bad_limit() {
        let response = service().handle_list_items(&[("limit", "lots")]);
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body["detail"][0]["path"], "limit");
    }
}
