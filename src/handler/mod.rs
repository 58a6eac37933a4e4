pub mod hello;
pub mod redirect;

use hyper::http;
use http_body_util::Full;
use bytes::Bytes;
use std::future::Future;
use std::pin::Pin;

pub use hello::HelloHandler;
pub use redirect::{MapHandler, document_handler, json_handler, yaml_handler};

pub type BoxResponseFuture<'a> = Pin<Box<dyn Future<Output = http::Response<Full<Bytes>>> + Send + 'a>>;

/// A link in the handler chain. Handlers never read the request body, so any
/// body type is accepted.
pub trait ServiceHandler {
    fn handle_request<'a, B>(&'a self, req: &'a http::Request<B>) -> BoxResponseFuture<'a>
    where
        B: Sync + 'a;
}

impl<T: ServiceHandler> ServiceHandler for std::sync::Arc<T> {
    fn handle_request<'a, B>(&'a self, req: &'a http::Request<B>) -> BoxResponseFuture<'a>
    where
        B: Sync + 'a,
    {
        (**self).handle_request(req)
    }
}
