//! Minimal HTTP/1.1 server: one full render pass per request.
//!
//! Routes:
//!
//! - `GET /` - sidebar layout, `?section=<label|slug>` picks the section
//! - `GET /tabs` - tabs layout, same query
//! - `GET /assets/<diagram>` - the system boundary image
//!
//! `HEAD` is answered without a body. Nothing is shared between requests
//! except the immutable renderer.

use std::borrow::Cow;
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use lca_report::{AssetError, Layout, ReportRenderer};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader, Take};
use tokio::net::tcp::OwnedReadHalf;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// URL prefix under which the diagram is served.
pub const ASSET_PREFIX: &str = "/assets/";

/// Upper bound on request header lines drained before responding.
const MAX_HEADER_LINES: usize = 100;

/// Upper bound on bytes read for the request line plus headers.
pub const MAX_REQUEST_BYTES: u64 = 16 * 1024;

type RequestReader = BufReader<Take<OwnedReadHalf>>;

/// Outcome of reading the request head.
enum Head {
    /// Peer closed before sending anything
    Closed,
    /// Trimmed request line of a head that fit the limit
    Request(String),
    /// Head rejected before routing
    Rejected(Response),
}

/// A complete HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status line, e.g. `HTTP/1.1 200 OK`
    pub status: &'static str,
    /// Content-Type header value
    pub content_type: &'static str,
    /// Response body
    pub body: Vec<u8>,
    /// False for HEAD requests
    pub include_body: bool,
}

impl Response {
    fn new(status: &'static str, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
            include_body: true,
        }
    }

    fn text(status: &'static str, body: &str) -> Self {
        Self::new(status, "text/plain; charset=utf-8", body)
    }

    /// Serialize headers (and body unless HEAD).
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = format!(
            "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\nCache-Control: no-store\r\nConnection: close\r\n\r\n",
            self.status,
            self.content_type,
            self.body.len()
        );
        let mut out = header.into_bytes();
        if self.include_body {
            out.extend_from_slice(&self.body);
        }
        out
    }

    /// Numeric status code, for logging.
    pub fn code(&self) -> &str {
        self.status.split_whitespace().nth(1).unwrap_or("")
    }
}

/// Bind `addr` and serve until the process is stopped.
pub async fn run(addr: &str, renderer: ReportRenderer) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr().context("listener has no local address")?;
    info!("Serving LCA report on http://{local} (tabs layout at http://{local}/tabs)");
    serve(listener, Arc::new(renderer)).await
}

/// Accept connections on an already bound listener.
pub async fn serve(listener: TcpListener, renderer: Arc<ReportRenderer>) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await.context("accept failed")?;
        let renderer = Arc::clone(&renderer);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, &renderer).await {
                debug!(%peer, "connection error: {e}");
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, renderer: &ReportRenderer) -> io::Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half.take(MAX_REQUEST_BYTES));

    let response = match read_head(&mut reader).await? {
        Head::Closed => return Ok(()),
        Head::Request(request_line) => {
            let response = respond(renderer, &request_line);
            info!(
                request = request_line.as_str(),
                status = response.code(),
                bytes = response.body.len(),
                "served"
            );
            response
        }
        Head::Rejected(response) => {
            warn!(status = response.code(), limit = MAX_REQUEST_BYTES, "request head rejected");
            response
        }
    };

    write_half.write_all(&response.to_bytes()).await?;
    write_half.shutdown().await
}

/// Read the request line and drain headers, within [`MAX_REQUEST_BYTES`].
async fn read_head(reader: &mut RequestReader) -> io::Result<Head> {
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).await? == 0 {
        return Ok(Head::Closed);
    }
    if !request_line.ends_with('\n') {
        return Ok(Head::Rejected(cut_off(reader)));
    }

    // Drain headers so closing the socket doesn't reset the connection
    let mut line = String::new();
    for _ in 0..MAX_HEADER_LINES {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            if reader.get_ref().limit() == 0 {
                return Ok(Head::Rejected(too_large()));
            }
            break;
        }
        if !line.ends_with('\n') {
            return Ok(Head::Rejected(cut_off(reader)));
        }
        if line == "\r\n" || line == "\n" {
            break;
        }
    }

    Ok(Head::Request(request_line.trim().to_string()))
}

/// A line ended without a newline: oversized if the limit was hit, else truncated.
fn cut_off(reader: &RequestReader) -> Response {
    if reader.get_ref().limit() == 0 {
        too_large()
    } else {
        Response::text("HTTP/1.1 400 Bad Request", "bad request")
    }
}

fn too_large() -> Response {
    Response::text(
        "HTTP/1.1 431 Request Header Fields Too Large",
        "request head too large",
    )
}

/// Build the response for one request line (`METHOD target VERSION`).
pub fn respond(renderer: &ReportRenderer, request_line: &str) -> Response {
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let is_head = method.eq_ignore_ascii_case("head");

    if !(method.eq_ignore_ascii_case("get") || is_head) {
        return Response::text("HTTP/1.1 405 Method Not Allowed", "method not allowed");
    }

    let mut response = route(renderer, target);
    response.include_body = !is_head;
    response
}

fn route(renderer: &ReportRenderer, target: &str) -> Response {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let section = query_param(query, "section");

    let layout = match path {
        "/" | "/index.html" => Some(Layout::Sidebar),
        "/tabs" | "/tabs/" => Some(Layout::Tabs),
        _ => None,
    };
    if let Some(layout) = layout {
        let html = renderer.page(layout, section.as_deref());
        return Response::new("HTTP/1.1 200 OK", "text/html; charset=utf-8", html);
    }

    if let Some(name) = path.strip_prefix(ASSET_PREFIX) {
        return serve_asset(renderer, name);
    }

    Response::text("HTTP/1.1 404 Not Found", "not found")
}

fn serve_asset(renderer: &ReportRenderer, name: &str) -> Response {
    let assets = renderer.assets();
    let decoded = url_decode_component(name).unwrap_or_else(|| name.to_string());
    // Only the configured diagram is served; nothing else under the asset dir
    if decoded != assets.diagram {
        return Response::text("HTTP/1.1 404 Not Found", "not found");
    }

    match assets.read_diagram() {
        Ok(bytes) => Response::new("HTTP/1.1 200 OK", content_type_for(&decoded), bytes),
        Err(err @ AssetError::NotFound { .. }) => {
            warn!("{err}");
            Response::text("HTTP/1.1 404 Not Found", "not found")
        }
        Err(err) => {
            warn!("{err}");
            Response::text("HTTP/1.1 500 Internal Server Error", "asset unreadable")
        }
    }
}

fn content_type_for(name: &str) -> &'static str {
    match Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// First value of `key` in a query string, percent- and `+`-decoded.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == key).then(|| url_decode_component(&v.replace('+', " ")).unwrap_or_else(|| v.to_string()))
    })
}

/// Percent-decode a URL component. `None` when the decoded bytes aren't UTF-8.
pub fn url_decode_component(input: &str) -> Option<String> {
    urlencoding::decode(input).ok().map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lca_report::{AssetStore, ChartAssets};
    use std::fs;
    use tempfile::TempDir;

    fn renderer_in(dir: &Path) -> ReportRenderer {
        ReportRenderer::new(
            AssetStore::new(dir).with_url_prefix(ASSET_PREFIX),
            ChartAssets::default(),
        )
    }

    fn body(resp: &Response) -> String {
        String::from_utf8(resp.body.clone()).expect("utf-8 body")
    }

    #[test]
    fn decodes_query_values() {
        assert_eq!(
            query_param("section=LCA+Results", "section").as_deref(),
            Some("LCA Results")
        );
        assert_eq!(
            query_param("x=1&section=LCI%20-%20System%20Boundary", "section").as_deref(),
            Some("LCI - System Boundary")
        );
        assert_eq!(query_param("x=1", "section"), None);
        assert_eq!(query_param("section", "section").as_deref(), Some(""));
    }

    #[test]
    fn malformed_escape_is_rejected() {
        assert_eq!(url_decode_component("%FF"), None);
        assert_eq!(url_decode_component("%E2%82").as_deref(), None);
        assert_eq!(url_decode_component("CO%E2%82%82").as_deref(), Some("CO₂"));
        // Incomplete escapes pass through verbatim
        assert_eq!(url_decode_component("%zz").as_deref(), Some("%zz"));
        assert_eq!(query_param("section=a%2Bb+c", "section").as_deref(), Some("a+b c"));
    }

    #[test]
    fn root_renders_selected_section() {
        let temp = TempDir::new().expect("temp dir");
        let resp = respond(&renderer_in(temp.path()), "GET /?section=insights HTTP/1.1");
        assert_eq!(resp.status, "HTTP/1.1 200 OK");
        assert_eq!(resp.content_type, "text/html; charset=utf-8");
        let html = body(&resp);
        assert!(html.contains("Key Insights"));
        assert!(html.contains("Process Efficiency"));
    }

    #[test]
    fn tabs_route_uses_tab_bar() {
        let temp = TempDir::new().expect("temp dir");
        let resp = respond(&renderer_in(temp.path()), "GET /tabs?section=Visualizations HTTP/1.1");
        let html = body(&resp);
        assert!(html.contains("tab-bar"));
        assert!(html.contains("id=\"sac-comparison\""));
    }

    #[test]
    fn unknown_section_falls_back_to_overview() {
        let temp = TempDir::new().expect("temp dir");
        let renderer = renderer_in(temp.path());
        let unknown = respond(&renderer, "GET /?section=Nope HTTP/1.1");
        let plain = respond(&renderer, "GET / HTTP/1.1");
        assert_eq!(unknown.status, "HTTP/1.1 200 OK");
        assert_eq!(unknown.body, plain.body);
    }

    #[test]
    fn head_omits_body() {
        let temp = TempDir::new().expect("temp dir");
        let resp = respond(&renderer_in(temp.path()), "HEAD / HTTP/1.1");
        assert!(!resp.include_body);
        let raw = String::from_utf8(resp.to_bytes()).expect("utf-8");
        assert!(raw.ends_with("\r\n\r\n"));
        assert!(raw.contains(&format!("Content-Length: {}", resp.body.len())));
    }

    #[test]
    fn rejects_other_methods() {
        let temp = TempDir::new().expect("temp dir");
        let resp = respond(&renderer_in(temp.path()), "POST / HTTP/1.1");
        assert_eq!(resp.status, "HTTP/1.1 405 Method Not Allowed");
    }

    #[test]
    fn unknown_path_is_404() {
        let temp = TempDir::new().expect("temp dir");
        let resp = respond(&renderer_in(temp.path()), "GET /admin HTTP/1.1");
        assert_eq!(resp.code(), "404");
    }

    #[test]
    fn serves_only_the_configured_diagram() {
        let temp = TempDir::new().expect("temp dir");
        fs::write(temp.path().join("picture1.png"), b"\x89PNG").expect("write");
        fs::write(temp.path().join("secret.txt"), b"nope").expect("write");
        let renderer = renderer_in(temp.path());

        let ok = respond(&renderer, "GET /assets/picture1.png HTTP/1.1");
        assert_eq!(ok.status, "HTTP/1.1 200 OK");
        assert_eq!(ok.content_type, "image/png");
        assert_eq!(ok.body, b"\x89PNG".to_vec());

        let other = respond(&renderer, "GET /assets/secret.txt HTTP/1.1");
        assert_eq!(other.code(), "404");
        let escape = respond(&renderer, "GET /assets/..%2Fsecret.txt HTTP/1.1");
        assert_eq!(escape.code(), "404");
    }

    #[test]
    fn missing_diagram_is_404_but_page_still_renders() {
        let temp = TempDir::new().expect("temp dir");
        let renderer = renderer_in(temp.path());
        let asset = respond(&renderer, "GET /assets/picture1.png HTTP/1.1");
        assert_eq!(asset.code(), "404");

        let page = respond(&renderer, "GET /?section=system-boundary HTTP/1.1");
        assert_eq!(page.code(), "200");
        let html = body(&page);
        assert!(html.contains("picture1.png"));
        assert!(html.contains("Process Heat"));
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type_for("a.PNG"), "image/png");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.svg"), "image/svg+xml");
        assert_eq!(content_type_for("a"), "application/octet-stream");
    }

    /// Send `raw` to a live server, close the write side, collect the reply.
    async fn exchange(raw: &[u8]) -> String {
        let temp = TempDir::new().expect("temp dir");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let renderer = Arc::new(renderer_in(temp.path()));
        let server = tokio::spawn(serve(listener, renderer));

        let mut stream = TcpStream::connect(addr).await.expect("connect");
        stream.write_all(raw).await.expect("write");
        stream.shutdown().await.expect("shutdown");
        let mut reply = Vec::new();
        stream.read_to_end(&mut reply).await.expect("read");

        server.abort();
        String::from_utf8(reply).expect("utf-8")
    }

    #[tokio::test]
    async fn serves_over_tcp() {
        let text = exchange(b"GET /?section=results HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Process-Level LCA Data"));
    }

    #[tokio::test]
    async fn oversized_request_line_is_rejected() {
        let raw = vec![b'A'; MAX_REQUEST_BYTES as usize];
        let text = exchange(&raw).await;

        assert!(text.starts_with("HTTP/1.1 431 Request Header Fields Too Large\r\n"));
        assert!(!text.contains("AAAA"));
    }

    #[tokio::test]
    async fn oversized_headers_are_rejected() {
        let mut raw = b"GET / HTTP/1.1\r\nX-Fill: ".to_vec();
        raw.resize(MAX_REQUEST_BYTES as usize, b'a');
        let text = exchange(&raw).await;

        assert!(text.starts_with("HTTP/1.1 431 Request Header Fields Too Large\r\n"));
    }

    #[tokio::test]
    async fn truncated_request_line_is_bad_request() {
        let text = exchange(b"GET /").await;
        assert!(text.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }
}
