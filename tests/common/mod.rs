#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;

use coi_serve::{Config, Server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// A response read off the wire, not interpreted beyond status/headers/body
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn header_count(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .count()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Both isolation headers present exactly once with the expected values
    pub fn assert_isolated(&self) {
        assert_eq!(self.header_count("cross-origin-opener-policy"), 1);
        assert_eq!(self.header_count("cross-origin-embedder-policy"), 1);
        assert_eq!(self.header("cross-origin-opener-policy"), Some("same-origin"));
        assert_eq!(self.header("cross-origin-embedder-policy"), Some("require-corp"));
    }
}

pub fn test_config(root: &Path) -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.root = root.display().to_string();
    config.logging.access_log = false;
    config
}

/// Start a server for `root` on an ephemeral port
pub async fn start_server(root: &Path) -> SocketAddr {
    start_with(test_config(root)).await
}

pub async fn start_with(config: Config) -> SocketAddr {
    let server = Server::bind(&config).expect("bind test server");
    let addr = server.local_addr().expect("local addr");
    tokio::spawn(server.run());
    addr
}

/// Send a raw request and read until the server closes the connection
pub async fn send_raw(addr: SocketAddr, request: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(request.as_bytes()).await.expect("write request");

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.expect("read response");
    parse_response(&buf)
}

pub async fn request(addr: SocketAddr, method: &str, target: &str) -> RawResponse {
    send_raw(
        addr,
        &format!("{method} {target} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"),
    )
    .await
}

pub async fn get(addr: SocketAddr, target: &str) -> RawResponse {
    request(addr, "GET", target).await
}

pub fn parse_response(buf: &[u8]) -> RawResponse {
    let split = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("end of headers");
    let head = std::str::from_utf8(&buf[..split]).expect("utf-8 head");
    let body = buf[split + 4..].to_vec();

    let mut lines = head.split("\r\n");
    let status_line = lines.next().expect("status line");
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status code");

    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
        .collect();

    RawResponse {
        status,
        headers,
        body,
    }
}
