//! Blocking HTTP fetcher.
//!
//! One [`Fetcher`] is shared across a sync pass; it carries the agent and
//! the optional `User-Agent` header applied to every request. Timeouts are
//! the agent's defaults and no request is retried.

use std::io::Read;

use ferry_core::SourceFile;

use crate::error::FetchError;
use crate::httpdate::parse_http_date;

/// Blocking HTTP client for source fetches.
pub struct Fetcher {
    agent: ureq::Agent,
    user_agent: Option<String>,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            user_agent: None,
        }
    }

    /// A fetcher that identifies itself on every request.
    ///
    /// The BLS access policy rejects anonymous clients, so the dataset job
    /// always uses this form with a contact string.
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            user_agent: Some(user_agent.into()),
        }
    }

    fn request(&self, url: &str) -> Result<ureq::Response, FetchError> {
        let mut request = self.agent.get(url);
        if let Some(user_agent) = &self.user_agent {
            request = request.set("User-Agent", user_agent);
        }
        match request.call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(code, _)) => Err(FetchError::HttpStatus {
                url: url.to_owned(),
                code,
            }),
            Err(ureq::Error::Transport(transport)) => Err(FetchError::Transport {
                url: url.to_owned(),
                source: Box::new(transport),
            }),
        }
    }

    /// GET a text body (directory listing markup).
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "fetching text");
        self.request(url)?
            .into_string()
            .map_err(|source| FetchError::Body {
                url: url.to_owned(),
                source,
            })
    }

    /// GET a raw body (API payload), forwarded verbatim to the store.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url, "fetching bytes");
        let response = self.request(url)?;
        read_body(url, response)
    }

    /// GET a source file: body plus the `Last-Modified` and `Content-Type`
    /// response headers.
    ///
    /// Both headers are required; `Last-Modified` must be RFC-1123. Either
    /// failure is per-file and the caller decides whether to continue.
    pub fn get_file(&self, url: &str, name: &str) -> Result<SourceFile, FetchError> {
        tracing::debug!(url, "fetching file");
        let response = self.request(url)?;

        let last_modified_raw = required_header(url, &response, "Last-Modified")?;
        let content_type = required_header(url, &response, "Content-Type")?;
        let last_modified = parse_http_date(&last_modified_raw)?;
        let content = read_body(url, response)?;

        Ok(SourceFile {
            name: name.to_owned(),
            url: url.to_owned(),
            content,
            content_type,
            last_modified,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn required_header(
    url: &str,
    response: &ureq::Response,
    header: &'static str,
) -> Result<String, FetchError> {
    response
        .header(header)
        .map(str::to_owned)
        .ok_or(FetchError::MissingHeader {
            url: url.to_owned(),
            header,
        })
}

fn read_body(url: &str, response: ureq::Response) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|source| FetchError::Body {
            url: url.to_owned(),
            source,
        })?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    use chrono::{TimeZone, Utc};

    use super::*;

    /// Serve a single canned HTTP response on a loopback port and capture
    /// the raw request that arrived.
    fn serve_once(response: String) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let n = stream.read(&mut buf).unwrap_or(0);
                let _ = tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{addr}/pr.class"), rx)
    }

    fn ok_response(extra_headers: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
            body.len(),
            extra_headers,
            body
        )
    }

    #[test]
    fn get_file_returns_body_and_parsed_headers() {
        let (url, _rx) = serve_once(ok_response(
            "Last-Modified: Wed, 21 Feb 2024 07:30:00 GMT\r\nContent-Type: text/plain\r\n",
            "series data",
        ));

        let file = Fetcher::new().get_file(&url, "pr.class").expect("fetch");
        assert_eq!(file.name, "pr.class");
        assert_eq!(file.content, b"series data");
        assert_eq!(file.content_type, "text/plain");
        assert_eq!(
            file.last_modified,
            Utc.with_ymd_and_hms(2024, 2, 21, 7, 30, 0).unwrap()
        );
    }

    #[test]
    fn non_success_status_maps_to_http_status_error() {
        let (url, _rx) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_owned(),
        );

        let err = Fetcher::new().get_file(&url, "gone.txt").expect_err("404");
        match err {
            FetchError::HttpStatus { code, .. } => assert_eq!(code, 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn missing_last_modified_is_a_header_error() {
        let (url, _rx) = serve_once(ok_response("Content-Type: text/plain\r\n", "body"));

        let err = Fetcher::new().get_file(&url, "pr.class").expect_err("no header");
        match err {
            FetchError::MissingHeader { header, .. } => assert_eq!(header, "Last-Modified"),
            other => panic!("expected missing header, got {other:?}"),
        }
    }

    #[test]
    fn malformed_last_modified_is_a_timestamp_error() {
        let (url, _rx) = serve_once(ok_response(
            "Last-Modified: not-a-date\r\nContent-Type: text/plain\r\n",
            "body",
        ));

        let err = Fetcher::new().get_file(&url, "pr.class").expect_err("bad date");
        assert!(matches!(err, FetchError::Timestamp { .. }));
    }

    #[test]
    fn user_agent_header_is_sent_when_configured() {
        let (url, rx) = serve_once(ok_response("Content-Type: text/html\r\n", "<html></html>"));

        let fetcher = Fetcher::with_user_agent("data-team@example.com");
        fetcher.get_text(&url).expect("fetch");

        let request = rx.recv().expect("captured request");
        assert!(
            request.contains("User-Agent: data-team@example.com"),
            "request was: {request}"
        );
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        // Bind then drop to get a port nothing is listening on.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };

        let err = Fetcher::new()
            .get_text(&format!("http://127.0.0.1:{port}/"))
            .expect_err("refused");
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
