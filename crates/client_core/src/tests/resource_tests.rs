use super::*;
use anyhow::Result;
use axum::{http::StatusCode as ServerStatusCode, routing::get, Json, Router};
use serde::Deserialize;
use shared::error::ErrorCode;
use tokio::net::TcpListener;

#[derive(Debug, Deserialize, PartialEq)]
struct Greeting {
    message: String,
}

async fn spawn_server(app: Router) -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn get_decodes_json_payloads() {
    let app = Router::new().route(
        "/greeting",
        get(|| async { Json(serde_json::json!({ "message": "hello" })) }),
    );
    let server_url = spawn_server(app).await.expect("spawn server");

    let client = ResourceClient::new(server_url);
    let greeting: Greeting = client.get("greeting").await.expect("get");
    assert_eq!(greeting.message, "hello");
}

#[tokio::test]
async fn paths_join_cleanly_against_a_trailing_slash_base_url() {
    let app = Router::new().route(
        "/greeting",
        get(|| async { Json(serde_json::json!({ "message": "hello" })) }),
    );
    let server_url = spawn_server(app).await.expect("spawn server");

    let client = ResourceClient::new(format!("{server_url}/"));
    let greeting: Greeting = client.get("/greeting").await.expect("get");
    assert_eq!(greeting.message, "hello");
}

#[tokio::test]
async fn non_success_status_surfaces_the_structured_detail_when_present() {
    let app = Router::new().route(
        "/greeting",
        get(|| async {
            (
                ServerStatusCode::NOT_FOUND,
                Json(ApiError::new(ErrorCode::NotFound, "no such greeting")),
            )
        }),
    );
    let server_url = spawn_server(app).await.expect("spawn server");

    let client = ResourceClient::new(server_url);
    let err = client.get::<Greeting>("greeting").await.expect_err("must fail");
    match err {
        ResourceError::Status { path, status, detail } => {
            assert_eq!(path, "greeting");
            assert_eq!(status, StatusCode::NOT_FOUND);
            let detail = detail.expect("structured detail");
            assert_eq!(detail.code, ErrorCode::NotFound);
            assert_eq!(detail.message, "no such greeting");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_without_a_body_still_maps_to_a_status_error() {
    let app = Router::new().route("/greeting", get(|| async { ServerStatusCode::INTERNAL_SERVER_ERROR }));
    let server_url = spawn_server(app).await.expect("spawn server");

    let client = ResourceClient::new(server_url);
    let err = client.get::<Greeting>("greeting").await.expect_err("must fail");
    match err {
        ResourceError::Status { status, detail, .. } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(detail.is_none());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_bodies_map_to_decode_errors() {
    let app = Router::new().route("/greeting", get(|| async { "definitely not json" }));
    let server_url = spawn_server(app).await.expect("spawn server");

    let client = ResourceClient::new(server_url);
    let err = client.get::<Greeting>("greeting").await.expect_err("must fail");
    assert!(matches!(err, ResourceError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_hosts_map_to_transport_errors() {
    // Bind then drop so the port is known-dead when the request goes out.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = ResourceClient::new(format!("http://{addr}"));
    let err = client.get::<Greeting>("greeting").await.expect_err("must fail");
    assert!(matches!(err, ResourceError::Transport { .. }));
}

#[tokio::test]
async fn delete_ignores_any_response_body() {
    let app = Router::new().route(
        "/greeting",
        axum::routing::delete(|| async { "gone, with an unparseable body" }),
    );
    let server_url = spawn_server(app).await.expect("spawn server");

    let client = ResourceClient::new(server_url);
    client.delete("greeting").await.expect("delete");
}
