use std::convert::Infallible;
use std::sync::Arc;

use hyper::body::Incoming;
use hyper::http;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::handler::ServiceHandler;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Bind `bind` and serve `handler` until Ctrl-C.
pub async fn start_server<H>(bind: &str, handler: H) -> Result<(), ServerError>
where
    H: ServiceHandler + Send + Sync + 'static,
{
    let listener = TcpListener::bind(bind).await.map_err(|source| ServerError::Bind {
        addr: bind.to_string(),
        source,
    })?;
    tracing::info!(address = %listener.local_addr()?, "starting the server");

    tokio::select! {
        () = serve(listener, handler) => Ok(()),
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested, no longer accepting connections");
            Ok(())
        }
    }
}

/// Accept loop: one task per connection, all sharing the same handler chain.
pub async fn serve<H>(listener: TcpListener, handler: H)
where
    H: ServiceHandler + Send + Sync + 'static,
{
    let handler = Arc::new(handler);
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "failed to accept connection");
                continue;
            }
        };
        let handler = Arc::clone(&handler);

        tokio::spawn(async move {
            let svc = service_fn(move |req: http::Request<Incoming>| {
                let handler = Arc::clone(&handler);
                async move {
                    // bodies are never consumed by the chain
                    let (parts, _body) = req.into_parts();
                    let req = http::Request::from_parts(parts, ());
                    tracing::trace!(%peer, method = %req.method(), uri = %req.uri(), "request");
                    Ok::<_, Infallible>(handler.handle_request(&req).await)
                }
            });
            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), svc)
                .await
            {
                tracing::debug!(%peer, error = %e, "connection closed with error");
            }
        });
    }
}
