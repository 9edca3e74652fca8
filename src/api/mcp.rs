//! Legacy JSON-RPC shim at `/v1/rpc`. Plain request/response over the tool
//! registry, for clients that do not speak streamable MCP.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::{json, Value as J};

use crate::core::mcp::RpcReq;
use crate::infra::http::json::{self as reply, RpcReply};
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| {
            json!({
                "name": t.name,
                "description": t.description,
                "inputSchema": t.input_schema,
                "outputSchema": t.output_schema,
            })
        })
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, String> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or("missing tool name")?;
    let args = params.get("arguments").unwrap_or(&J::Null);
    reg.call(name, args).await
}

/// Malformed bodies get HTTP 400 with a JSON-RPC parse error.
pub async fn http(
    axum::extract::State(reg): axum::extract::State<ToolRegistry>,
    body: Result<Json<RpcReq>, JsonRejection>,
) -> RpcReply {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected rpc body");
            return reply::rejected_body(&rejection);
        }
    };
    tracing::debug!(method = %req.method, id = ?req.id, "rpc request");
    let id = req.id.clone();
    let resp = match req.method.as_str() {
        "initialize" => reply::initialized(id),
        "shutdown" => reply::result(id, J::Null),
        "tools.list" | "tools/list" => reply::result(id, tools_list(&reg)),
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => reply::result(id, out),
            Err(e) => {
                tracing::warn!(error = %e, "tools.call failed");
                reply::tool_failure(id, e)
            }
        },
        other => reply::method_not_found(id, other),
    };
    tracing::trace!(response = ?resp.1, "rpc response");
    resp
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::{routing::post, Router};
    use hyper::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::clients::FnSource;
    use crate::domain::testkit::*;
    use crate::tools::registry::build_registry;

    const BODY_LIMIT: usize = 1024 * 1024;

    fn registry() -> ToolRegistry {
        let deck = deck(vec![
            slide("g1", vec![text_box("b1", "Agenda")]),
            with_notes(slide("g2", vec![]), "Close with questions"),
        ]);
        build_registry(Arc::new(FnSource::fixed(deck)))
    }

    fn router_with_state() -> Router {
        Router::new().route("/v1/rpc", post(super::http)).with_state(registry())
    }

    async fn post_rpc(body: &str) -> (hyper::StatusCode, J) {
        let req = Request::builder()
            .method("POST")
            .uri("/v1/rpc")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = router_with_state().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(J::Null))
    }

    #[test]
    fn tools_list_includes_schemas() {
        let v = super::tools_list(&registry());
        let tools = v["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 5);
        assert_eq!(tools[0]["name"], "get_presentation");
        assert!(tools[0]["inputSchema"]["properties"]["presentation_id"].is_object());
        assert!(tools[0]["outputSchema"]["properties"]["slide_count"].is_object());
    }

    #[tokio::test]
    async fn call_tool_requires_a_name() {
        let err = super::call_tool(&registry(), &json!({"arguments": {}})).await.unwrap_err();
        assert_eq!(err, "missing tool name");
    }

    #[tokio::test]
    async fn initialize_reports_server_name() {
        let (status, v) = post_rpc(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#).await;
        assert!(status.is_success());
        assert_eq!(v["result"]["serverInfo"]["name"], "slides-mcp-gateway");
    }

    #[tokio::test]
    async fn tools_call_returns_summary_and_structured_content() {
        let body = r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_slide_notes","arguments":{"presentation_id":"deck-1","slide_object_id":"g2"}}}"#;
        let (status, v) = post_rpc(body).await;
        assert!(status.is_success());
        assert_eq!(v["result"]["structuredContent"]["notes"], "Close with questions");
        assert_eq!(v["result"]["content"][0]["text"], "Speaker notes for slide 1:\n\nClose with questions");
    }

    #[tokio::test]
    async fn tools_call_missing_arguments_returns_tool_error() {
        let body = r#"{"jsonrpc":"2.0","id":5,"method":"tools.call","params":{"name":"list_slides"}}"#;
        let (_, v) = post_rpc(body).await;
        assert_eq!(v["error"]["code"], -32000);
        assert!(v["error"]["message"].as_str().unwrap().starts_with("invalid arguments"));
    }

    #[tokio::test]
    async fn tools_call_unknown_tool_returns_error() {
        let body = r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"does.not.exist","arguments":{}}}"#;
        let (_, v) = post_rpc(body).await;
        assert_eq!(v["error"]["code"], -32000);
    }

    #[tokio::test]
    async fn unknown_method_returns_method_not_found() {
        let (_, v) = post_rpc(r#"{"jsonrpc":"2.0","id":4,"method":"nope"}"#).await;
        assert_eq!(v["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_with_parse_error() {
        let (status, v) = post_rpc("{ not-json }").await;
        assert_eq!(status, 400);
        assert_eq!(v["error"]["code"], -32700);
        assert!(v["id"].is_null());
    }

    #[tokio::test]
    async fn shutdown_returns_null_result() {
        let (_, v) = post_rpc(r#"{"jsonrpc":"2.0","id":9,"method":"shutdown"}"#).await;
        assert!(v["result"].is_null());
        assert!(v.get("error").is_none());
    }
}
