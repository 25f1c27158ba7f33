// src/core/net.rs
//
// HTTP/1.0 GET over TCP (std-only). Serves the `http://` record sources;
// one attempt, no redirects, no TLS.

use std::{io::{self, Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::LoadError;

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, LoadError> {
    let target = format!("http://{host}:{port}{path}");
    let io_err = |source: io::Error| LoadError::Http { target: target.clone(), source };

    let mut s = TcpStream::connect((host, port)).map_err(io_err)?;
    let timeout = Some(Duration::from_secs(HTTP_TIMEOUT_SECS));
    s.set_read_timeout(timeout).map_err(io_err)?;
    s.set_write_timeout(timeout).map_err(io_err)?;

    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nAccept: application/json\r\nConnection: close\r\n\r\n"
    );
    s.write_all(req.as_bytes()).map_err(io_err)?;
    s.flush().map_err(io_err)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(io_err)?;

    let body_idx = find_header_end(&buf)
        .ok_or_else(|| io_err(io::Error::new(io::ErrorKind::InvalidData, "malformed HTTP response")))?;
    let head = String::from_utf8_lossy(&buf[..body_idx]);

    let status = parse_status(&head)
        .ok_or_else(|| io_err(io::Error::new(io::ErrorKind::InvalidData, "malformed status line")))?;
    if status != 200 {
        return Err(LoadError::Status { target: target.clone(), status });
    }

    // Same rule as reading a file: the body must be valid UTF-8.
    String::from_utf8(buf.split_off(body_idx))
        .map_err(|e| io_err(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Offset just past the blank line that ends the headers.
fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
}

/// `HTTP/1.1 404 Not Found` → 404
fn parse_status(resp: &str) -> Option<u16> {
    let line = resp.split("\r\n").next()?;
    let mut parts = line.split_whitespace();
    if !parts.next()?.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::{io::{Read, Write}, net::TcpListener, thread};

    use super::*;

    #[test]
    fn status_line() {
        assert_eq!(parse_status("HTTP/1.1 200 OK\r\n\r\n[]"), Some(200));
        assert_eq!(parse_status("HTTP/1.0 404 Not Found\r\n"), Some(404));
        assert_eq!(parse_status("garbage"), None);
    }

    #[test]
    fn header_end() {
        assert_eq!(find_header_end(b"HTTP/1.0 200 OK\r\n\r\n[]"), Some(19));
        assert_eq!(find_header_end(b"HTTP/1.0 200 OK\r\n"), None);
    }

    fn serve_once(response: Vec<u8>) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(&response);
            }
        });
        port
    }

    #[test]
    fn invalid_utf8_body_is_rejected() {
        let mut response = b"HTTP/1.0 200 OK\r\n\r\n[\"".to_vec();
        response.extend_from_slice(&[0xFF, 0xFE]);
        response.extend_from_slice(b"\"]");
        let port = serve_once(response);

        let err = http_get("127.0.0.1", port, "/x.json").unwrap_err();
        match err {
            LoadError::Http { source, .. } => assert_eq!(source.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn valid_body_is_returned_verbatim() {
        let port = serve_once("HTTP/1.0 200 OK\r\nContent-Type: application/json\r\n\r\n[\"é\"]".as_bytes().to_vec());
        assert_eq!(http_get("127.0.0.1", port, "/x.json").unwrap(), "[\"é\"]");
    }
}
