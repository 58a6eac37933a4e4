//! Path-to-URL redirect service.
//!
//! A [`handler::MapHandler`] looks the request path up in an immutable
//! [`build::RedirectMapping`] and answers 302 Found on a hit, otherwise it
//! delegates to its fallback handler. Mappings come from a dictionary or from
//! a YAML/JSON list of `{path, url}` records (see [`config`]).

pub mod build;
pub mod config;
pub mod handler;
pub mod http_server;
pub mod util;
