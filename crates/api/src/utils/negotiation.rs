use super::request::last_header;
use axum::http::HeaderMap;
use checkip_domain::ResponseFormat;

/// Picks the response format.
///
/// An explicit `format` parameter wins. Otherwise the request's own
/// non-empty `Content-Type` decides, and only without one does a browser-like
/// `User-Agent` get HTML. Everything else is plain text.
pub fn negotiate_format(format_param: Option<&str>, headers: &HeaderMap) -> ResponseFormat {
    if let Some(format) = format_param.and_then(|raw| raw.parse().ok()) {
        return format;
    }

    if let Some(content_type) =
        last_header(headers, "content-type").filter(|ct| !ct.is_empty())
    {
        return if content_type.starts_with("text/html") {
            ResponseFormat::Html
        } else if content_type.starts_with("application/json") {
            ResponseFormat::Json
        } else {
            ResponseFormat::Text
        };
    }

    match last_header(headers, "user-agent") {
        Some(agent) if agent.starts_with("Mozilla") => ResponseFormat::Html,
        _ => ResponseFormat::Text,
    }
}
