use std::sync::Arc;

use axum::body::{to_bytes, Body};
use hyper::Request;
use serde_json::{json, Value as J};
use tower::ServiceExt;

use slides_mcp_gateway::clients::{slides::parse_presentation, FnSource};
use slides_mcp_gateway::infra::http_app::build_app;

const BODY_LIMIT: usize = 1024 * 1024;

fn fixture_source() -> Arc<FnSource> {
    let deck = parse_presentation(&json!({
        "presentationId": "p1",
        "title": "Weekly Sync",
        "slides": [
            {
                "objectId": "a",
                "pageElements": [
                    {
                        "objectId": "tbl",
                        "table": {
                            "rows": 1,
                            "columns": 2,
                            "tableRows": [{ "tableCells": [
                                { "text": { "textElements": [{ "textRun": { "content": "Owner\n" } }] } },
                                { "text": { "textElements": [{ "textRun": { "content": "Status\n" } }] } }
                            ] }]
                        }
                    }
                ]
            },
            { "objectId": "b", "pageElements": [] }
        ]
    }))
    .unwrap();
    Arc::new(FnSource::fixed(deck))
}

async fn rpc(app: &axum::Router, body: J) -> J {
    let req = Request::builder()
        .method("POST")
        .uri("/v1/rpc")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
    let bytes = to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn http_e2e_tools_list_and_call() {
    let app = build_app(fixture_source(), false);

    let list = rpc(&app, json!({"jsonrpc":"2.0","id":1,"method":"tools/list"})).await;
    assert_eq!(list["result"]["tools"].as_array().unwrap().len(), 5);

    let call = rpc(
        &app,
        json!({"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"list_slides","arguments":{"presentation_id":"p1"}}}),
    )
    .await;
    assert_eq!(
        call["result"]["content"][0]["text"],
        "Slide 0 [a]: Owner | Status (1 elements)\nSlide 1 [b]: (untitled) (0 elements)\n"
    );
    assert_eq!(call["result"]["structuredContent"]["slides"][0]["title"], "Owner | Status");
    assert!(call["result"]["structuredContent"]["slides"][1].get("title").is_none());
}

#[tokio::test]
async fn http_e2e_slide_errors_use_application_error_code() {
    let app = build_app(fixture_source(), false);

    let out_of_range = rpc(
        &app,
        json!({"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_slide","arguments":{"presentation_id":"p1","slide_index":2}}}),
    )
    .await;
    assert_eq!(out_of_range["error"]["code"], -32000);
    assert!(out_of_range["error"]["message"].as_str().unwrap().contains("out of range"));

    let missing = rpc(
        &app,
        json!({"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"get_slide_notes","arguments":{"presentation_id":"p1"}}}),
    )
    .await;
    assert_eq!(
        missing["error"]["message"],
        "either slide_index or slide_object_id must be provided"
    );
}

#[tokio::test]
async fn http_e2e_content_of_whole_deck() {
    let app = build_app(fixture_source(), false);
    let call = rpc(
        &app,
        json!({"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"get_presentation_content","arguments":{"presentation_id":"p1","include_notes":true}}}),
    )
    .await;
    assert_eq!(
        call["result"]["content"][0]["text"],
        "Presentation: Weekly Sync (2 slides)\n\n--- Slide 0: Owner | Status ---\n  Owner | Status\n\n--- Slide 1: (untitled) ---\n\n"
    );
}
