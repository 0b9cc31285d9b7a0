use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::config::GreeterConfig;
use crate::errors::{EventError, GreeterError};

const INTERNAL_ERROR: &str = "Internal server error";

/// Platform-provided invocation metadata. Only the request id survives the
/// trip into the response body.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub request_id: Option<String>,
}

/// Proxy-style response record: status code, a body holding serialized JSON,
/// and a fixed content-type header. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct SuccessBody<'a> {
    message: String,
    event: &'a Value,
    timestamp: Option<&'a str>,
}

/// Maps one event to one response. Errors never cross this boundary: any
/// failure while building the success response is logged and flattened into
/// the status-500 payload.
pub fn handle(
    event: &Value,
    context: Option<&InvocationContext>,
    config: &GreeterConfig,
) -> GreetingResponse {
    match try_handle(event, context, config) {
        Ok(response) => response,
        Err(e) => {
            error!("Error processing request: {}", e);
            error_response(&e)
        }
    }
}

fn try_handle(
    event: &Value,
    context: Option<&InvocationContext>,
    config: &GreeterConfig,
) -> Result<GreetingResponse, GreeterError> {
    let fields = event.as_object().ok_or_else(|| EventError::NotAnObject {
        kind: json_kind(event),
    })?;

    let name = match fields.get("name") {
        Some(value) => coerce_to_string(value),
        None => config.greeting.default_name.clone(),
    };

    info!("Lambda invoked with name: {}", name);

    let message = format!("Hello, {name}! Welcome to the Terraform & Terragrunt workshop!");
    let body = SuccessBody {
        message,
        event,
        timestamp: context.and_then(|ctx| ctx.request_id.as_deref()),
    };

    Ok(GreetingResponse {
        status_code: 200,
        body: serde_json::to_string(&body)?,
        headers: json_headers(),
    })
}

fn error_response(error: &GreeterError) -> GreetingResponse {
    let body = serde_json::json!({
        "error": INTERNAL_ERROR,
        "message": error.to_string(),
    });

    GreetingResponse {
        status_code: 500,
        body: body.to_string(),
        headers: json_headers(),
    }
}

fn json_headers() -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

/// A string name is used verbatim; any other JSON value is rendered as its
/// JSON text for interpolation.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> GreeterConfig {
        GreeterConfig::default()
    }

    fn context(request_id: &str) -> InvocationContext {
        InvocationContext {
            request_id: Some(request_id.to_string()),
        }
    }

    fn body_json(response: &GreetingResponse) -> Value {
        serde_json::from_str(&response.body).expect("body should be valid JSON")
    }

    #[test]
    fn test_greets_named_caller() {
        let event = json!({"name": "Alice"});
        let response = handle(&event, Some(&context("req-123")), &config());

        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(
            body["message"],
            "Hello, Alice! Welcome to the Terraform & Terragrunt workshop!"
        );
        assert_eq!(body["timestamp"], "req-123");
    }

    #[test]
    fn test_defaults_to_world_without_name() {
        let event = json!({});
        let response = handle(&event, None, &config());

        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(
            body["message"],
            "Hello, World! Welcome to the Terraform & Terragrunt workshop!"
        );
        assert_eq!(body["timestamp"], Value::Null);
    }

    #[test]
    fn test_echoes_event_verbatim() {
        let event = json!({"name": "Bob", "nested": {"k": [1, 2, 3]}, "extra": null});
        let response = handle(&event, None, &config());

        assert_eq!(body_json(&response)["event"], event);
    }

    #[test]
    fn test_timestamp_null_without_request_id() {
        let ctx = InvocationContext { request_id: None };
        let response = handle(&json!({"name": "Carol"}), Some(&ctx), &config());

        assert_eq!(body_json(&response)["timestamp"], Value::Null);
    }

    #[test]
    fn test_coerces_non_string_names() {
        let response = handle(&json!({"name": 42}), None, &config());

        assert_eq!(
            body_json(&response)["message"],
            "Hello, 42! Welcome to the Terraform & Terragrunt workshop!"
        );
    }

    #[test]
    fn test_non_object_event_flattens_to_error_payload() {
        let event = json!("not an object");
        let response = handle(&event, Some(&context("req-500")), &config());

        assert_eq!(response.status_code, 500);
        let body = body_json(&response);
        assert_eq!(body["error"], "Internal server error");
        assert!(body["message"].as_str().unwrap().contains("JSON object"));
    }

    #[test]
    fn test_content_type_header_is_always_json() {
        let ok = handle(&json!({}), None, &config());
        let err = handle(&json!([1, 2]), None, &config());

        for response in [ok, err] {
            assert_eq!(
                response.headers.get("Content-Type").map(String::as_str),
                Some("application/json")
            );
        }
    }

    #[test]
    fn test_configured_default_name() {
        let mut config = GreeterConfig::default();
        config.greeting.default_name = "Terraformer".to_string();

        let response = handle(&json!({}), None, &config);
        assert_eq!(
            body_json(&response)["message"],
            "Hello, Terraformer! Welcome to the Terraform & Terragrunt workshop!"
        );
    }

    #[test]
    fn test_response_serializes_with_proxy_field_names() {
        let response = handle(&json!({}), None, &config());
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("statusCode").is_some());
        assert!(value.get("body").is_some());
        assert_eq!(value["headers"]["Content-Type"], "application/json");
    }
}
