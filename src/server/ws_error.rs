/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Every error carries a code, a human-readable message and an optional context.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::{json, Value};

use crate::server::game_session::messages::ServerMessage;

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_ACTION").
/// - `message`: Human-readable error message.
/// - `context`: Optional context (e.g. the rejected payload).
pub fn ws_error_message(code: &str, message: &str, context: Option<Value>) -> String {
    serde_json::to_string(&ServerMessage::error(code, message, context))
        .unwrap_or_else(|_| format!(r#"{{"action":"Error","data":{{"code":"{}"}}}}"#, code))
}

/// Returns an HTTP error response with a JSON body.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<Value>,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": {
            "code": code,
            "message": message,
            "context": context,
        }
    }))
}
