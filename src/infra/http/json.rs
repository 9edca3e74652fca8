//! Replies of the `/v1/rpc` shim, as `(status, body)` pairs axum can return.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::core::mcp::{err as rpc_err, ok as rpc_ok, InitializeResult, RpcResp};

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Application error; every failed tool call on the shim uses it.
pub const TOOL_ERROR: i32 = -32000;

pub type RpcReply = (StatusCode, Json<RpcResp>);

pub fn result(id: Value, result: Value) -> RpcReply {
    (StatusCode::OK, Json(rpc_ok(id, result)))
}

pub fn initialized(id: Value) -> RpcReply {
    let info = serde_json::to_value(InitializeResult::current()).unwrap_or(Value::Null);
    result(id, info)
}

/// Tool failures still answer 200; the error lives in the envelope.
pub fn tool_failure(id: Value, message: impl Into<String>) -> RpcReply {
    (StatusCode::OK, Json(rpc_err(id, TOOL_ERROR, message, None)))
}

pub fn method_not_found(id: Value, method: &str) -> RpcReply {
    (
        StatusCode::OK,
        Json(rpc_err(id, METHOD_NOT_FOUND, format!("unknown method: {method}"), None)),
    )
}

/// Bodies that never parsed have no id to echo back.
pub fn rejected_body(rejection: &JsonRejection) -> RpcReply {
    (
        StatusCode::BAD_REQUEST,
        Json(rpc_err(Value::Null, PARSE_ERROR, format!("parse error: {rejection}"), None)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_echoes_id() {
        let (status, Json(resp)) = result(json!("req-7"), json!({"tools": []}));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp.id, "req-7");
        assert!(resp.error.is_none());
        assert!(resp.result.unwrap()["tools"].is_array());
    }

    #[test]
    fn initialized_carries_server_info() {
        let (_, Json(resp)) = initialized(json!(1));
        assert_eq!(resp.result.unwrap()["serverInfo"]["name"], "slides-mcp-gateway");
    }

    #[test]
    fn tool_failure_keeps_message_and_http_ok() {
        let (status, Json(resp)) = tool_failure(json!(3), "slide index 9 out of range");
        assert_eq!(status, StatusCode::OK);
        assert!(resp.result.is_none());
        let err = resp.error.unwrap();
        assert_eq!(err.code, TOOL_ERROR);
        assert_eq!(err.message, "slide index 9 out of range");
    }

    #[test]
    fn method_not_found_names_the_method() {
        let (_, Json(resp)) = method_not_found(json!(4), "slides/delete");
        let err = resp.error.unwrap();
        assert_eq!(err.code, METHOD_NOT_FOUND);
        assert_eq!(err.message, "unknown method: slides/delete");
    }
}
