//! Local HTTP responder for the client tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answers every request with one fixed status and body, recording the
/// request method of each connection.
#[derive(Debug, Clone)]
pub(crate) struct StubServer {
    root: String,
    requests: Arc<AtomicUsize>,
    methods: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub(crate) async fn start(status: u16, body: &'static [u8]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let root = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(AtomicUsize::new(0));
        let methods = Arc::new(Mutex::new(Vec::new()));

        let (count, seen) = (Arc::clone(&requests), Arc::clone(&methods));
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let method = String::from_utf8_lossy(&buf)
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string();
                count.fetch_add(1, Ordering::SeqCst);
                seen.lock().unwrap().push(method.clone());

                let head = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                if method != "HEAD" {
                    let _ = socket.write_all(body).await;
                }
                let _ = socket.shutdown().await;
            }
        });

        Self {
            root,
            requests,
            methods,
        }
    }

    /// URL of `path` on this server.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.root, path.trim_start_matches('/'))
    }

    pub(crate) fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub(crate) fn methods(&self) -> Vec<String> {
        self.methods.lock().unwrap().clone()
    }
}
