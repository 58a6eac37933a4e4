use hyper::http;

use crate::handler::{BoxResponseFuture, ServiceHandler};
use crate::util::http::make_text_resp;

pub const GREETING: &str = "Hello, world!";

/// Terminal handler: greets every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloHandler;

impl ServiceHandler for HelloHandler {
    fn handle_request<'a, B>(&'a self, req: &'a http::Request<B>) -> BoxResponseFuture<'a>
    where
        B: Sync + 'a,
    {
        tracing::trace!(path = req.uri().path(), "default handler");
        Box::pin(std::future::ready(make_text_resp(http::StatusCode::OK, GREETING)))
    }
}
