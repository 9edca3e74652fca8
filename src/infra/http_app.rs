use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::clients::PresentationSource;
use crate::infra::runtime::mcp_transport::{make_streamable_http_service, LocalSessionManager};
use crate::tools::registry::build_registry;
use crate::tools::slides::tool_router::factory_with_source;

/// `/healthz` + streamable MCP at `/mcp`, plus the JSON-RPC shim at `/v1/rpc`
/// unless `deprecate_rest` is set. Every surface shares one source.
pub fn build_app(source: Arc<dyn PresentationSource>, deprecate_rest: bool) -> Router {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let mcp_source = source.clone();
    let factory = move || factory_with_source(mcp_source.clone());
    let mcp_service = make_streamable_http_service(factory, session_mgr);

    let app = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service));

    if deprecate_rest {
        return app;
    }
    let rpc = Router::new()
        .route("/v1/rpc", post(crate::api::mcp::http))
        .with_state(build_registry(source));
    app.merge(rpc)
}

pub fn build_app_from_env(deprecate_rest: bool) -> Router {
    let cfg = crate::infra::config::AppConfig::from_env_and_toml();
    build_app(crate::clients::source_from_config(&cfg), deprecate_rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::FnSource;
    use crate::domain::testkit::*;
    use axum::body::{to_bytes, Body};
    use hyper::Request;
    use tower::ServiceExt;

    fn source() -> Arc<dyn PresentationSource> {
        Arc::new(FnSource::fixed(deck(vec![slide("g1", vec![])])))
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let app = build_app(source(), true);
        let resp = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(resp.status().is_success());
        let bytes = to_bytes(resp.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn rpc_route_absent_when_rest_is_deprecated() {
        let app = build_app(source(), true);
        let req = Request::builder()
            .method("POST")
            .uri("/v1/rpc")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn rpc_route_lists_tools_when_enabled() {
        let app = build_app(source(), false);
        let req = Request::builder()
            .method("POST")
            .uri("/v1/rpc")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert!(resp.status().is_success());
        let bytes = to_bytes(resp.into_body(), 1 << 20).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["result"]["tools"].as_array().unwrap().len(), 5);
    }
}
