use std::sync::Arc;
use axum::Router;
use tower::{limit::ConcurrencyLimitLayer, ServiceBuilder};
use axum::http;
use tower_http::request_id::{RequestId, MakeRequestId};
use tower_http::{trace::TraceLayer, request_id::{PropagateRequestIdLayer, SetRequestIdLayer}};
use hw_core::{config::AppConfig, HeaderConfig};
use http::header::HeaderName;
use crate::{routes, security::SecurityHeadersLayer};
use uuid::Uuid;

#[derive(Clone)]
struct MakeRequestUuid;
impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        http::HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Demo router: routes, request ids, tracing and the security headers layer.
pub fn build_app(cfg: &AppConfig, headers: Arc<HeaderConfig>) -> anyhow::Result<Router> {
    let request_id_header: HeaderName = cfg.logging.request_id_header.parse()?;

    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &http::Request<_>| {
            let method = req.method().clone();
            let uri = req.uri().path().to_string();
            tracing::info_span!("request", %method, %uri, status = tracing::field::Empty)
        })
        .on_response(|res: &http::Response<_>, latency: std::time::Duration, span: &tracing::Span| {
            let status = res.status().as_u16();
            span.record("status", tracing::field::display(status));
            tracing::info!(parent: span, status, latency_ms = latency.as_millis(), "request.completed");
        });

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id_header.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(trace)
        .layer(ConcurrencyLimitLayer::new(1024));

    let router = Router::new()
        .merge(routes::routes())
        .layer(SecurityHeadersLayer::new(headers))
        .layer(middleware);
    Ok(router)
}
