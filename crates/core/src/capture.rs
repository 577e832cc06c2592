// Capture normalization
//
// Turns a raw inbound HTTP request into a NewWebhook ready for insertion.
// Every request is accepted: nothing here can fail, whatever the method,
// path, headers or body shape the third party sent.

use serde_json::Value;
use std::collections::HashMap;

use crate::webhook::{NewWebhook, CAPTURE_STATUS_CODE};

/// Path segment under which all captured traffic arrives.
pub const CAPTURE_PREFIX: &str = "/capture";

/// Separator used when flattening multi-valued headers and query params.
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

/// Request body after transport decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureBody {
    /// Plain text (or anything that was not decoded as JSON).
    Text(String),
    /// A JSON document sent with a JSON content type.
    Structured(Value),
}

impl CaptureBody {
    /// Decode raw body bytes.
    ///
    /// Empty bodies decode to `None`. Bodies sent with a JSON content type that
    /// parse as JSON become `Structured`; everything else is lossy UTF-8 text.
    pub fn decode(content_type: Option<&str>, bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }

        if content_type.is_some_and(is_json_content_type) {
            if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
                return Some(Self::Structured(value));
            }
        }

        Some(Self::Text(String::from_utf8_lossy(bytes).into_owned()))
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// An inbound request as seen by the capture route.
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub method: String,
    /// Full request path, including the capture prefix.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
    pub ip: String,
    /// Header pairs in the order the transport produced them. A name may repeat.
    pub headers: Vec<(String, String)>,
    pub body: Option<CaptureBody>,
}

impl CapturedRequest {
    /// Convert into the canonical record shape.
    pub fn normalize(self) -> NewWebhook {
        let headers = flatten_headers(self.headers);
        let content_type = headers.get("content-type").cloned();
        let content_length = parse_content_length(&headers);

        NewWebhook {
            method: self.method.to_ascii_uppercase(),
            pathname: replace_nul(strip_capture_prefix(&self.path)),
            ip: replace_nul(self.ip),
            status_code: CAPTURE_STATUS_CODE,
            content_type,
            content_length,
            headers,
            body: normalize_body(self.body),
            query_params: parse_query_params(self.query.as_deref()),
        }
    }
}

/// Remove the leading capture prefix. Paths outside the prefix are returned as-is.
pub fn strip_capture_prefix(path: &str) -> String {
    match path.strip_prefix(CAPTURE_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

/// Collapse a header multimap into one string per (lowercased) name.
pub fn flatten_headers<I>(headers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut flattened: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = replace_nul(value);
        flattened
            .entry(replace_nul(name.to_ascii_lowercase()))
            .and_modify(|existing| {
                existing.push_str(MULTI_VALUE_SEPARATOR);
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    flattened
}

/// `content-length` as an integer, or `None` when missing or malformed.
pub fn parse_content_length(headers: &HashMap<String, String>) -> Option<i32> {
    headers
        .get("content-length")
        .and_then(|value| value.trim().parse::<i32>().ok())
}

/// Bring any decoded body into its stored string form.
/// An empty result, text or JSON string alike, is stored as absent.
pub fn normalize_body(body: Option<CaptureBody>) -> Option<String> {
    let text = match body? {
        CaptureBody::Text(text) => text,
        CaptureBody::Structured(Value::Null) => return None,
        CaptureBody::Structured(Value::String(text)) => text,
        CaptureBody::Structured(value) => value.to_string(),
    };
    (!text.is_empty()).then(|| replace_nul(text))
}

/// Swap NUL characters for U+FFFD. PostgreSQL TEXT and JSONB cannot hold them.
pub fn replace_nul(text: String) -> String {
    if text.contains('\0') {
        text.replace('\0', "\u{FFFD}")
    } else {
        text
    }
}

/// Parse a query string. Repeated keys are joined like headers.
pub fn parse_query_params(query: Option<&str>) -> HashMap<String, String> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return HashMap::new();
    };

    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let value = replace_nul(value.into_owned());
        params
            .entry(replace_nul(key.into_owned()))
            .and_modify(|existing| {
                existing.push_str(MULTI_VALUE_SEPARATOR);
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    params
}
