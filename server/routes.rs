use std::io::Cursor;
use std::path::{Component, Path};

use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::handlers;

/// Directory the bundled frontend is served from.
const STATIC_ROOT: &str = "static";

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn cors_header() -> Header {
    Header::from_bytes(b"Access-Control-Allow-Origin", b"*").unwrap()
}

pub fn json_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![
            Header::from_bytes(b"Content-Type", b"application/json").unwrap(),
            cors_header(),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn error_response(status: u16, message: &str) -> Response<Cursor<Vec<u8>>> {
    let bytes = message.as_bytes().to_vec();
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![
            Header::from_bytes(b"Content-Type", b"text/plain").unwrap(),
            cors_header(),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

fn preflight_response() -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(204),
        vec![
            cors_header(),
            Header::from_bytes(b"Access-Control-Allow-Methods", b"GET, POST, OPTIONS").unwrap(),
            Header::from_bytes(b"Access-Control-Allow-Headers", b"Content-Type").unwrap(),
        ],
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

fn not_found() -> Response<Cursor<Vec<u8>>> {
    error_response(404, "404 Not Found")
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests. The handler receives a `&mut Request` so
/// the dispatcher retains ownership and responds at the end.
pub fn dispatch(mut request: Request) {
    let method = request.method().clone();
    let url = request.url().to_owned();

    let path = match url.find('?') {
        Some(pos) => url[..pos].to_owned(),
        None => url,
    };

    let response = match (method, path.as_str()) {
        (Method::Options, _) => preflight_response(),
        (Method::Post, "/train") => handlers::train::handle(&mut request),
        (Method::Get, _) => serve_static(&path),
        _ => not_found(),
    };

    let _ = request.respond(response);
}

// ---------------------------------------------------------------------------
// Static frontend
// ---------------------------------------------------------------------------

fn serve_static(url_path: &str) -> Response<Cursor<Vec<u8>>> {
    let relative = match url_path.trim_start_matches('/') {
        "" => "index.html",
        other => other,
    };

    // Refuse anything that would escape the static root.
    let candidate = Path::new(relative);
    if candidate
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return not_found();
    }

    let full_path = Path::new(STATIC_ROOT).join(candidate);
    match std::fs::read(&full_path) {
        Ok(bytes) => {
            let len = bytes.len();
            Response::new(
                StatusCode(200),
                vec![
                    Header::from_bytes(b"Content-Type", content_type(relative).as_bytes()).unwrap(),
                    cors_header(),
                ],
                Cursor::new(bytes),
                Some(len),
                None,
            )
        }
        Err(_) => not_found(),
    }
}

fn content_type(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
