//! Lifecycle integration tests: serving over a real socket, interrupt-style
//! shutdown with port release, and fatal bind failure.

use devserve::config::DEFAULT_PAGE;
use devserve::error::AppError;
use devserve::{create_router, run_server, serve, Config};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

#[tokio::test]
async fn test_serve_answers_on_a_real_socket_and_stops_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), "hello devserve").unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(dir.path());

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, app, async move {
        shutdown_rx.await.ok();
    }));

    // One full request over the wire.
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /hello.txt HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let response = String::from_utf8_lossy(&raw).to_string();

    assert!(response.starts_with("HTTP/1.1 200 OK"), "got: {}", response);
    assert!(response.to_ascii_lowercase().contains("access-control-allow-origin: *"));
    assert!(response.to_ascii_lowercase().contains("cache-control: no-store, no-cache, must-revalidate"));
    assert!(response.ends_with("hello devserve"));

    // The injected shutdown stands in for the interrupt signal: the serve
    // call must return promptly and give the port back.
    shutdown_tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop after shutdown was triggered")
        .expect("server task panicked");
    assert!(result.is_ok());

    TcpListener::bind(addr)
        .await
        .expect("port was not released after shutdown");
}

#[tokio::test]
async fn test_bind_failure_is_fatal_and_reported() {
    let dir = tempfile::tempdir().unwrap();

    // Occupy a port, then ask the server to bind the same one.
    let holder = TcpListener::bind("0.0.0.0:0").await.unwrap();
    let port = holder.local_addr().unwrap().port();

    let config = Config {
        port,
        root: dir.path().to_path_buf(),
        default_page: DEFAULT_PAGE.to_string(),
    };

    let err = run_server(config)
        .await
        .expect_err("binding an occupied port must fail");

    assert!(matches!(err, AppError::Bind { .. }), "got: {:?}", err);
    assert!(err.to_string().contains("failed to bind"));
}
