// SPDX-License-Identifier: PMPL-1.0-or-later

//! Blocking client for the public Google Translate web endpoint.

use super::TranslationService;
use crate::error::{LingoError, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslate {
    client: Client,
    endpoint: String,
}

impl GoogleTranslate {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        // No timeout: callers that need one wrap the service.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!("lingo-basics/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl TranslationService for GoogleTranslate {
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source),
                ("tl", dest),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(LingoError::Service {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }
        parse_response(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The payload is `[[["<translated>", "<original>", ...], ...], ...]`;
/// long input comes back split into several segments.
pub(crate) fn parse_response(body: &str) -> Result<String> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| LingoError::Parse(err.to_string()))?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| LingoError::Parse("missing translation segments".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }
    if translated.is_empty() {
        return Err(LingoError::Parse(
            "no translated text in response".to_string(),
        ));
    }
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    #[test]
    fn parses_single_segment() {
        let body = r#"[[["Katze","cat",null,null,10]],null,"en",null,null,null,1,[],[["en"],null,[1],["en"]]]"#;
        assert_eq!(parse_response(body).unwrap(), "Katze");
    }

    #[test]
    fn joins_segments_verbatim() {
        let body = r#"[[["Wähle ","Choose ",null,null,3],["eine Kategorie","a category",null,null,3]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "Wähle eine Kategorie");
    }

    #[test]
    fn rejects_unexpected_shapes() {
        assert!(matches!(parse_response("{}"), Err(LingoError::Parse(_))));
        assert!(matches!(parse_response("not json"), Err(LingoError::Parse(_))));
    }

    #[test]
    fn rejects_response_without_text() {
        assert!(matches!(parse_response("[[[null]]]"), Err(LingoError::Parse(_))));
        assert!(matches!(parse_response("[[]]"), Err(LingoError::Parse(_))));
    }

    /// Serve one canned HTTP response and hand back the request line.
    fn serve_once(status: &str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let status = status.to_string();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });
        (format!("http://{}/translate_a/single", addr), handle)
    }

    fn local_service(endpoint: String) -> GoogleTranslate {
        GoogleTranslate {
            client: Client::builder().no_proxy().build().unwrap(),
            endpoint,
        }
    }

    #[test]
    fn fetches_translation_over_http() {
        let (endpoint, handle) = serve_once("200 OK", r#"[[["Katze","cat",null,null,10]]]"#);
        let service = local_service(endpoint);

        assert_eq!(service.translate("cat", "en", "de").unwrap(), "Katze");

        let request_line = handle.join().unwrap();
        assert!(request_line.starts_with("GET /translate_a/single?"), "{}", request_line);
        for param in ["client=gtx", "sl=en", "tl=de", "q=cat"] {
            assert!(request_line.contains(param), "{} missing from {}", param, request_line);
        }
    }

    #[test]
    fn non_success_status_is_a_service_error() {
        let (endpoint, handle) = serve_once("429 Too Many Requests", "slow down");
        let service = local_service(endpoint);

        match service.translate("cat", "en", "de") {
            Err(LingoError::Service { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("expected Service error, got {:?}", other),
        }
        handle.join().unwrap();
    }
}
