#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use items_daemon::server::{wait_for_shutdown, ShutdownSignal};
use items_daemon::{build_router, AppState, Item, ItemCollection};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::watch;

async fn send_raw(addr: std::net::SocketAddr, method: &str, path: &str) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, body.to_string())
}

#[tokio::test]
async fn test_serves_items_over_tcp_and_shuts_down() {
    let items = Arc::new(ItemCollection::with_items(vec![Item::new("Banana", 1.99)]));
    let app = build_router(AppState::new(items));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
            .await
            .expect("serve app");
    });

    let (status, body) = send_raw(addr, "GET", "/items/Banana").await;
    assert_eq!(status, 200);
    let json: serde_json::Value = serde_json::from_str(&body).expect("item json");
    assert_eq!(json, serde_json::json!({"item": {"name": "Banana", "price": 1.99}}));

    let (status, _) = send_raw(addr, "DELETE", "/items/Banana").await;
    assert_eq!(status, 200);
    let (status, _) = send_raw(addr, "GET", "/items/Banana").await;
    assert_eq!(status, 404);

    shutdown_tx.send(ShutdownSignal::Shutdown).unwrap();
    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server should stop")
        .unwrap();
}
