//! In-process HTTP responder standing in for the upstream APIs in tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A canned response served for request targets containing every needle.
#[derive(Clone)]
pub(crate) struct Route {
    needles: Vec<String>,
    status: u16,
    body: String,
    delay: Duration,
}

impl Route {
    pub(crate) fn json(needle: &str, status: u16, body: serde_json::Value) -> Self {
        Self::raw(needle, status, &body.to_string())
    }

    pub(crate) fn raw(needle: &str, status: u16, body: &str) -> Self {
        Self {
            needles: vec![needle.to_string()],
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// Additionally requires `needle` in the request target.
    pub(crate) fn matching(mut self, needle: &str) -> Self {
        self.needles.push(needle.to_string());
        self
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub(crate) struct StubServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Binds to an ephemeral port and serves `routes` until the runtime shuts down.
    /// The first route whose needles all occur in the request target wins; no match is a 404.
    pub(crate) async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let log = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    let _ = respond(stream, &routes, &log).await;
                });
            }
        });

        Self { base, requests }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Request targets (path and query) seen so far.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(
    mut stream: TcpStream,
    routes: &[Route],
    log: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(target.clone());

    let (status, body, delay) = routes
        .iter()
        .find(|r| r.needles.iter().all(|n| target.contains(n.as_str())))
        .map(|r| (r.status, r.body.clone(), r.delay))
        .unwrap_or((404, String::new(), Duration::ZERO));
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
