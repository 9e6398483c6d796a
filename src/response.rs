//! Substitute response for blocked requests.

use serde::Serialize;

/// Descriptor of the response a host serves in place of a blocked request.
///
/// An empty `200 OK` renders invisibly, whereas an error status or a
/// network failure makes web views show broken-image icons or load errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedResponse {
    pub mime_type: &'static str,
    pub encoding: &'static str,
    pub status_code: u16,
    pub reason_phrase: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
    #[serde(skip)]
    pub body: &'static [u8],
}

const BLOCKED_HEADERS: &[(&str, &str)] = &[("Cache-Control", "no-cache")];

impl BlockedResponse {
    /// Look up a header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }

    /// Whether the response forbids caching.
    pub fn is_uncacheable(&self) -> bool {
        self.header("Cache-Control")
            .map(|v| v.contains("no-cache") || v.contains("no-store"))
            .unwrap_or(false)
    }
}

/// Build the canonical blocked response.
pub const fn build_blocked_response() -> BlockedResponse {
    BlockedResponse {
        mime_type: "text/plain",
        encoding: "UTF-8",
        status_code: 200,
        reason_phrase: "OK",
        headers: BLOCKED_HEADERS,
        body: b"",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_response_shape() {
        let resp = build_blocked_response();

        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.reason_phrase, "OK");
        assert_eq!(resp.mime_type, "text/plain");
        assert_eq!(resp.encoding, "UTF-8");
        assert!(resp.body.is_empty());
        assert!(resp.is_uncacheable());
        assert_eq!(resp.header("cache-control"), Some("no-cache"));
        assert_eq!(resp.header("Content-Length"), None);
    }

    #[test]
    fn test_blocked_response_is_constant() {
        assert_eq!(build_blocked_response(), build_blocked_response());
    }

    #[test]
    fn test_blocked_response_json() {
        let value = serde_json::to_value(build_blocked_response()).unwrap();

        assert_eq!(value["mimeType"], "text/plain");
        assert_eq!(value["encoding"], "UTF-8");
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["reasonPhrase"], "OK");
        assert_eq!(value["headers"][0][0], "Cache-Control");
        assert!(value.get("body").is_none());
    }
}
