//! Turning an address and a match verdict into a response body

mod html;
mod json;
mod prometheus;
mod template;
mod text;

use crate::errors::ApiError;
use crate::utils::NavUrls;
use checkip_domain::{ClassifiedAddress, MatchResult, ResponseFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody {
    pub content_type: &'static str,
    pub body: String,
}

pub fn render(
    format: ResponseFormat,
    address: &ClassifiedAddress,
    match_result: &MatchResult,
    urls: &NavUrls,
    title: &str,
) -> Result<RenderedBody, ApiError> {
    let body = match format {
        ResponseFormat::Text => text::render(address, match_result),
        ResponseFormat::Json => json::render(address, match_result)?,
        ResponseFormat::Html => html::render(address, match_result, urls, title)?,
        ResponseFormat::Prometheus => prometheus::render(address, match_result),
    };

    Ok(RenderedBody {
        content_type: format.content_type(),
        body,
    })
}
