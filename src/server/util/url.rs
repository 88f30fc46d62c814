use axum::http::HeaderMap;

/// Builds the public avatar URL for an athlete code from the request headers.
///
/// The host comes from the `Host` header and the scheme from `X-Forwarded-Proto`,
/// falling back to `localhost` and `http`.
pub fn avatar_url(headers: &HeaderMap, code: &str) -> String {
    let host = headers
        .get("host")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    format!("{}://{}/avatars/{}.png", scheme, host, code)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn builds_url_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("api.example.edu"));

        assert_eq!(
            avatar_url(&headers, "ATH001"),
            "http://api.example.edu/avatars/ATH001.png"
        );
    }

    #[test]
    fn honours_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("api.example.edu"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        assert_eq!(
            avatar_url(&headers, "X"),
            "https://api.example.edu/avatars/X.png"
        );
    }
}
