use std::borrow::Cow;

use hyper::http;

use crate::build::mapping::{RedirectMapping, build_mapping};
use crate::config::{ConfigFormat, ParseError, parse_entries, parse_json, parse_yaml};
use crate::handler::{BoxResponseFuture, ServiceHandler};
use crate::util::http::make_redirect_resp;

/// Redirects paths found in `mapping` with 302 Found; everything else is
/// handed to `fallback` untouched.
#[derive(Debug, Clone)]
pub struct MapHandler<F> {
    mapping: RedirectMapping,
    fallback: F,
}

impl<F> MapHandler<F> {
    pub fn new(mapping: RedirectMapping, fallback: F) -> Self {
        MapHandler { mapping, fallback }
    }

    pub fn mapping(&self) -> &RedirectMapping {
        &self.mapping
    }
}

impl<F: ServiceHandler> ServiceHandler for MapHandler<F> {
    fn handle_request<'a, B>(&'a self, req: &'a http::Request<B>) -> BoxResponseFuture<'a>
    where
        B: Sync + 'a,
    {
        let path = req.uri().path();
        match self.mapping.get(path) {
            Some(url) => {
                let location = resolve_location(path, url);
                tracing::debug!(%path, %location, "redirecting");
                Box::pin(std::future::ready(make_redirect_resp(req.method(), &location)))
            }
            None => self.fallback.handle_request(req),
        }
    }
}

pub fn yaml_handler<F>(yaml: &[u8], fallback: F) -> Result<MapHandler<F>, ParseError> {
    let entries = parse_yaml(yaml)?;
    Ok(MapHandler::new(build_mapping(entries), fallback))
}

pub fn json_handler<F>(json: &[u8], fallback: F) -> Result<MapHandler<F>, ParseError> {
    let entries = parse_json(json)?;
    Ok(MapHandler::new(build_mapping(entries), fallback))
}

pub fn document_handler<F>(
    format: ConfigFormat,
    raw: &[u8],
    fallback: F,
) -> Result<MapHandler<F>, ParseError> {
    let entries = parse_entries(format, raw)?;
    Ok(MapHandler::new(build_mapping(entries), fallback))
}

/// Targets without a scheme or leading `/` are relative to the directory of
/// the request path.
fn resolve_location<'u>(req_path: &str, url: &'u str) -> Cow<'u, str> {
    if has_scheme(url) || url.starts_with('/') {
        return Cow::Borrowed(url);
    }
    let dir = match req_path.rfind('/') {
        Some(i) => &req_path[..=i],
        None => "/",
    };
    Cow::Owned(format!("{dir}{url}"))
}

fn has_scheme(url: &str) -> bool {
    match url.find(':') {
        Some(i) if i > 0 => {
            let scheme = &url[..i];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
