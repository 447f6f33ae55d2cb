use axum::http::header::{
    HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderMap;

pub const WASM_CONTENT_TYPE: &str = "application/wasm";

pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-embedder-policy");
pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");

/// Static header set applied to every outgoing response, built once at
/// startup from the server configuration.
#[derive(Debug, Clone)]
pub struct HeaderSet {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderSet {
    /// CORS headers for cross-origin fetches during local development.
    pub fn cors() -> Self {
        Self {
            headers: vec![
                (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
                (
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET, POST, OPTIONS"),
                ),
                (
                    ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("Content-Type"),
                ),
            ],
        }
    }

    /// CORS plus the COOP/COEP pair browsers require before enabling
    /// shared-memory WASM features.
    pub fn cross_origin_isolated() -> Self {
        let mut set = Self::cors();
        set.headers.push((
            CROSS_ORIGIN_EMBEDDER_POLICY,
            HeaderValue::from_static("require-corp"),
        ));
        set.headers.push((
            CROSS_ORIGIN_OPENER_POLICY,
            HeaderValue::from_static("same-origin"),
        ));
        set
    }

    pub fn for_isolation(isolated: bool) -> Self {
        if isolated {
            Self::cross_origin_isolated()
        } else {
            Self::cors()
        }
    }

    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}
