//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Calls seen by a mock node: `(method, params)`.
pub type CallLog = Arc<Mutex<Vec<(String, Value)>>>;

/// Per-method reply: `Ok(result)` or `Err((code, message))`.
pub type Reply = Result<Value, (i64, String)>;

/// Start a JSON-RPC node on an ephemeral port.
///
/// `f` answers each call; every call is recorded in the returned log.
pub async fn start_mock_node<F>(f: F) -> (SocketAddr, CallLog)
where
    F: Fn(&str, &Value) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let log = calls.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        let _ = serve(socket, f.as_ref(), &log).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, calls)
}

/// A node that answers the whole happy path.
#[allow(dead_code)]
pub fn polygon_node(account: &'static str) -> impl Fn(&str, &Value) -> Reply + Send + Sync + 'static {
    move |method: &str, _params: &Value| match method {
        "eth_chainId" => Ok(json!("0x89")),
        "eth_requestAccounts" => Ok(json!([account])),
        "wallet_switchEthereumChain" => Ok(Value::Null),
        "eth_blockNumber" => Ok(json!("0x2fcd2c0")),
        other => Err((-32601, format!("the method {} does not exist/is not available", other))),
    }
}

/// A node that accepts connections and never answers.
#[allow(dead_code)]
pub async fn start_silent_node() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    addr
}

/// Address of a port nothing listens on.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Methods recorded so far, in order.
#[allow(dead_code)]
pub fn methods(calls: &CallLog) -> Vec<String> {
    calls.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
}

async fn serve<F>(mut socket: TcpStream, f: &F, log: &CallLog) -> std::io::Result<()>
where
    F: Fn(&str, &Value) -> Reply,
{
    let body = read_body(&mut socket).await?;
    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let method = request["method"].as_str().unwrap_or_default().to_string();
    let params = request["params"].clone();
    log.lock().unwrap().push((method.clone(), params.clone()));

    let reply = match f(&method, &params) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": request["id"], "result": result }),
        Err((code, message)) => json!({
            "jsonrpc": "2.0",
            "id": request["id"],
            "error": { "code": code, "message": message }
        }),
    };
    let reply = reply.to_string();

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.len(),
        reply
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

async fn read_body(socket: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(Vec::new());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Ok(buf[header_end..].to_vec())
}
