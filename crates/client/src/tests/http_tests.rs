// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::request::{HttpMethod, PreparedRequest};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serves exactly one canned HTTP response on a loopback port.
///
/// Returns the base URL to hit and a handle yielding the raw request head as
/// captured off the wire.
fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, thread::JoinHandle<String>) {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut captured: Vec<u8> = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            let n: usize = stream.read(&mut buf).unwrap();
            captured.extend_from_slice(&buf[..n]);
            if n == 0 || captured.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response: String = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&captured).into_owned()
    });

    (format!("http://{addr}/"), handle)
}

#[test]
fn test_execute_returns_full_body_and_sends_auth_header() {
    let (base, handle) = serve_once("200 OK", r#"{"ok":true}"#);
    let client: ApiClient = ApiClient::new("k");

    let request: PreparedRequest = PreparedRequest {
        method: HttpMethod::Get,
        url: format!("{base}host/all/web1?status=active"),
        body: None,
    };
    let body: String = client.execute(&request).unwrap();
    assert_eq!(body, r#"{"ok":true}"#);

    let head: String = handle.join().unwrap();
    assert!(head.to_lowercase().contains("authorization:"));
    assert!(head.contains("API-KEY k"));
    assert!(head.to_lowercase().contains("content-type: application/json"));
    assert!(head.starts_with("GET /host/all/web1?status=active"));
}

#[test]
fn test_error_status_body_flows_through() {
    // Status codes are not inspected; a 503 body is just a body.
    let (base, handle) = serve_once("503 Service Unavailable", "upstream down");
    let client: ApiClient = ApiClient::new("k");

    let request: PreparedRequest = PreparedRequest {
        method: HttpMethod::Delete,
        url: format!("{base}abc-123"),
        body: None,
    };
    let body: String = client.execute(&request).unwrap();
    assert_eq!(body, "upstream down");
    handle.join().unwrap();
}

#[test]
fn test_connection_refused_is_network_error() {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client: ApiClient = ApiClient::new("k");
    let request: PreparedRequest = PreparedRequest {
        method: HttpMethod::Get,
        url: format!("http://{addr}/host"),
        body: None,
    };
    let result = client.execute(&request);
    assert!(matches!(result, Err(ClientError::Network(_))));
}
