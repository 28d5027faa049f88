//! Security headers middleware.
//!
//! Writes every header configured in a shared [`HeaderConfig`] onto each
//! response after the inner service has produced it. The request is never
//! inspected and the pipeline is never short-circuited.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::Response;
use axum::middleware::Next;
use futures_util::future::BoxFuture;
use hw_core::HeaderConfig;
use tower::{Layer, Service};

/// Tower layer that adds the configured security headers.
#[derive(Clone)]
pub struct SecurityHeadersLayer {
    config: Arc<HeaderConfig>,
}

impl SecurityHeadersLayer {
    pub fn new(config: Arc<HeaderConfig>) -> Self {
        Self { config }
    }
}

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeadersService {
            inner,
            config: self.config.clone(),
        }
    }
}

#[derive(Clone)]
pub struct SecurityHeadersService<S> {
    inner: S,
    config: Arc<HeaderConfig>,
}

impl<S> Service<Request> for SecurityHeadersService<S>
where
    S: Service<Request, Response = Response<Body>> + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let config = self.config.clone();
        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.await?;
            config.apply(response.headers_mut());
            Ok(response)
        })
    }
}

/// The same behaviour for `axum::middleware::from_fn_with_state`.
pub async fn security_headers(
    State(config): State<Arc<HeaderConfig>>,
    req: Request,
    next: Next,
) -> axum::response::Response {
    let mut response = next.run(req).await;
    config.apply(response.headers_mut());
    response
}
