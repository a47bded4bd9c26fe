use axum::http::HeaderMap;

use backend_domain::RuntimeConfig;

/// Gate for the write endpoints. When no key is configured, writes are
/// open.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_key) = &config.api_key {
        return extract_api_key(headers)
            .map(|v| v == *api_key)
            .unwrap_or(false);
    }
    true
}

fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("X-API-Key")?.to_str().ok()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn config(api_key: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:8000".to_string(),
            api_key: api_key.map(ToString::to_string),
            cors_origins: vec!["*".to_string()],
            max_body_bytes: 1024,
            request_timeout_seconds: 15,
        }
    }

    #[test]
    fn open_when_no_key_configured() {
        assert!(authorize(&config(None), &HeaderMap::new()));
    }

    #[test]
    fn matching_key_passes() {
        let mut headers = HeaderMap::new();
        headers.insert("X-API-Key", HeaderValue::from_static("sekrit"));
        assert!(authorize(&config(Some("sekrit")), &headers));
    }

    #[test]
    fn missing_or_wrong_key_fails() {
        let config = config(Some("sekrit"));
        assert!(!authorize(&config, &HeaderMap::new()));

        let mut headers = HeaderMap::new();
        headers.insert("X-API-Key", HeaderValue::from_static("nope"));
        assert!(!authorize(&config, &headers));
    }

    #[test]
    fn blank_header_value_fails() {
        let mut headers = HeaderMap::new();
        headers.insert("X-API-Key", HeaderValue::from_static("   "));
        assert!(!authorize(&config(Some("sekrit")), &headers));
    }
}
