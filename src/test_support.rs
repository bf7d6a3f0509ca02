// Shared test helpers
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::startup::{Notice, Notifier};
use std::sync::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a single HTTP response on an ephemeral port and return its URL
pub async fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
    serve_with_length(status_line, body, body.len()).await
}

/// Serve a 200 response that advertises `declared_len` bytes but closes after `body`
pub async fn serve_truncated(body: &'static [u8], declared_len: usize) -> String {
    serve_with_length("200 OK", body, declared_len).await
}

async fn serve_with_length(
    status_line: &'static str,
    body: &'static [u8],
    content_length: usize,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Read until the end of the request headers
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let header = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line, content_length
        );
        socket.write_all(header.as_bytes()).await.unwrap();
        socket.write_all(body).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}/EnglishKatakanaDictionary.csv", addr)
}

/// URL on localhost with nothing listening
pub async fn unreachable_url() -> String {
    // Bind then drop to get a free port
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    format!("http://{}/dict.csv", addr)
}

/// Notifier that records every notice it receives
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
