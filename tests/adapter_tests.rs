//! Control socket tests - single client, raw byte passthrough

use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};

use tui_2048::adapter::{check_tcp_listen_available, decode_direction, run_server, ServerConfig, ServerHandle};
use tui_2048::types::Direction;

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0, // ephemeral
        read_timeout_ms: 50,
        buffer_size: 4096,
        max_pending_payloads: 8,
    }
}

struct Harness {
    payload_rx: mpsc::Receiver<Vec<u8>>,
    handle: ServerHandle,
    connected: Arc<AtomicBool>,
    server: tokio::task::JoinHandle<anyhow::Result<()>>,
    addr: std::net::SocketAddr,
}

async fn start_harness(config: ServerConfig) -> Harness {
    let (payload_tx, payload_rx) = mpsc::channel(config.max_pending_payloads);
    let (out_tx, out_rx) = mpsc::unbounded_channel();
    let connected = Arc::new(AtomicBool::new(false));
    let handle = ServerHandle::new(out_tx, Arc::clone(&connected));
    let (ready_tx, ready_rx) = oneshot::channel();

    let server_connected = Arc::clone(&connected);
    let server = tokio::spawn(run_server(
        config,
        payload_tx,
        out_rx,
        server_connected,
        Some(ready_tx),
    ));

    let addr = ready_rx.await.expect("server did not report its address");

    Harness {
        payload_rx,
        handle,
        connected,
        server,
        addr,
    }
}

async fn wait_until_connected(flag: &Arc<AtomicBool>) {
    for _ in 0..100 {
        if flag.load(Ordering::SeqCst) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("server never observed the client connection");
}

#[tokio::test]
async fn test_forwards_raw_payloads_to_queue() {
    let mut h = start_harness(test_config()).await;

    let mut client = TcpStream::connect(h.addr).await.expect("connect");
    client.write_all(b"up").await.expect("write");

    let payload = tokio::time::timeout(Duration::from_secs(2), h.payload_rx.recv())
        .await
        .expect("timed out waiting for payload")
        .expect("queue closed");

    assert_eq!(payload, b"up");
    assert_eq!(decode_direction(&payload), Some(Direction::Up));
}

#[tokio::test]
async fn test_read_timeout_is_silently_ignored() {
    let mut h = start_harness(test_config()).await;

    let mut client = TcpStream::connect(h.addr).await.expect("connect");
    wait_until_connected(&h.connected).await;

    // Sit idle across several read timeouts, then send: the connection
    // must still be alive and the payload must still arrive.
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(!h.server.is_finished(), "server quit during idle timeouts");

    client.write_all(b"left").await.expect("write");
    let payload = tokio::time::timeout(Duration::from_secs(2), h.payload_rx.recv())
        .await
        .expect("timed out waiting for payload")
        .expect("queue closed");
    assert_eq!(decode_direction(&payload), Some(Direction::Left));
}

#[tokio::test]
async fn test_disconnect_ends_the_listener() {
    let h = start_harness(test_config()).await;

    let client = TcpStream::connect(h.addr).await.expect("connect");
    wait_until_connected(&h.connected).await;
    drop(client);

    let result = tokio::time::timeout(Duration::from_secs(2), h.server)
        .await
        .expect("server did not stop after disconnect")
        .expect("server task panicked");
    assert!(result.is_ok());
    assert!(!h.connected.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_outbound_text_reaches_client_unframed() {
    let h = start_harness(test_config()).await;

    let mut client = TcpStream::connect(h.addr).await.expect("connect");
    wait_until_connected(&h.connected).await;

    h.handle.send("score 128");

    let mut buf = [0u8; 64];
    let n = tokio::time::timeout(Duration::from_secs(2), client.read(&mut buf))
        .await
        .expect("timed out waiting for outbound text")
        .expect("read");
    assert_eq!(&buf[..n], b"score 128");
}

#[test]
fn test_port_check_fails_when_port_in_use() {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind ephemeral port");
    let port = listener.local_addr().unwrap().port();

    let err = check_tcp_listen_available("127.0.0.1", port).expect_err("expected addr in use");
    assert_eq!(err.kind(), std::io::ErrorKind::AddrInUse);
}
