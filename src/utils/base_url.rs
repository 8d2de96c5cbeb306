//! Public base URL extraction from HTTP requests.

use axum::http::{HeaderMap, Uri, header};

/// Header set by reverse proxies carrying the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the base URL that short links are shown under.
///
/// A configured base URL wins. Otherwise the URL is rebuilt from the
/// request as `{scheme}://{host}`:
///
/// - scheme: `X-Forwarded-Proto` when it is `http` or `https`, else `http`
/// - host: the `Host` header (port kept), else the request URI authority,
///   else `localhost`
///
/// The result never ends with a slash.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:3000".parse().unwrap());
///
/// let base = resolve_base_url(None, &headers, &Uri::from_static("/"));
/// assert_eq!(base, "http://sho.rt:3000");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap, uri: &Uri) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.to_string()))
        .unwrap_or_else(|| "localhost".to_string());

    format!("{scheme}://{host}")
}
