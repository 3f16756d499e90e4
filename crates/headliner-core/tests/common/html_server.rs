//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves one fixed status line and HTML body to every GET, or accepts
//! connections and never answers (to exercise the client timeout).

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with the given status line (e.g. "200 OK") and body.
    Page { status: &'static str, body: String },
    /// Read the request, then hold the connection open without responding.
    Stall(Duration),
}

/// Serve `body` with `200 OK`. Returns the base URL (e.g. "http://127.0.0.1:12345/").
pub fn start(body: &str) -> String {
    start_with(Reply::Page {
        status: "200 OK",
        body: body.to_string(),
    })
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start_with(reply: Reply) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let reply = Arc::new(reply);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let reply = Arc::clone(&reply);
            thread::spawn(move || handle(stream, &reply));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, reply: &Reply) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    match reply {
        Reply::Stall(d) => thread::sleep(*d),
        Reply::Page { status, body } => {
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    }
}
