use crate::{
    dto::CheckIpParams,
    errors::ApiError,
    render,
    state::AppState,
    utils::{negotiate_format, remote_address, request_host, NavUrls},
};
use axum::{
    extract::{ConnectInfo, Query, Request, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use checkip_domain::{AddressFamily, ClassifiedAddress, DomainName, SubnetSizes};
use std::net::SocketAddr;
use tracing::{debug, instrument};

#[instrument(skip_all, name = "api_check_ip")]
pub async fn check_ip(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    request: Request,
) -> Result<Response, ApiError> {
    let params = CheckIpParams::from_pairs(pairs);
    let headers = request.headers();

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let remote = remote_address(headers, peer).ok_or(ApiError::MissingRemoteAddress)?;
    let address = ClassifiedAddress::classify(&remote);

    let domain = params
        .domain
        .as_deref()
        .and_then(|raw| DomainName::parse(raw).ok());
    let v4_subnet = valid_subnet(AddressFamily::V4, params.v4subnet.as_deref());
    let v6_subnet = valid_subnet(AddressFamily::V6, params.v6subnet.as_deref());

    debug!(
        remote = %address,
        domain = domain.as_ref().map(DomainName::as_str),
        v4_subnet = v4_subnet.map(|(_, size)| size),
        v6_subnet = v6_subnet.map(|(_, size)| size),
        "Handling check request"
    );

    let mut nav_params = Vec::with_capacity(3);
    if let Some(domain) = &domain {
        nav_params.push(("domain", domain.as_str()));
    }
    if let Some((raw, _)) = v4_subnet {
        nav_params.push(("v4subnet", raw));
    }
    if let Some((raw, _)) = v6_subnet {
        nav_params.push(("v6subnet", raw));
    }
    let nav = NavUrls::build(&state.sites, &nav_params);

    let format = negotiate_format(params.format.as_deref(), headers);
    let title = state.sites.title_for(request_host(headers));

    let subnets = SubnetSizes::from_valid(
        v4_subnet.map(|(_, size)| size),
        v6_subnet.map(|(_, size)| size),
    );
    let match_result = state
        .resolve_match
        .execute(&address, domain.as_ref(), subnets)
        .await;

    let rendered = render::render(format, &address, &match_result, &nav, title)?;

    debug!(
        format = %format,
        title = title,
        queried = match_result.is_queried(),
        gauge = match_result.gauge_value(),
        "Check request answered"
    );

    Ok(([(CONTENT_TYPE, rendered.content_type)], rendered.body).into_response())
}

/// The raw parameter text alongside its parsed value, or `None` when the
/// parameter is missing or invalid.
fn valid_subnet(family: AddressFamily, raw: Option<&str>) -> Option<(&str, u8)> {
    let raw = raw?;
    SubnetSizes::parse(family, raw).ok().map(|size| (raw, size))
}
