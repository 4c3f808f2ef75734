//! Probe filter middleware
//!
//! Answers directory-enumeration attempts with a deliberate redirect loop and
//! common scanner paths with a bare 404, before any route matching runs.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// Path prefixes answered with a redirect loop.
const BLOCKED_PREFIXES: &[&str] = &[
    "/.git",
    "/.env",
    "/wp-admin",
    "/wp-content",
    "/wordpress",
    "/.well-known",
    "/phpmyadmin",
    "/config",
    "/backup",
    "/api/config",
];

/// File extensions scanners look for; answered 404 with no body.
const BLOCKED_EXTENSIONS: &[&str] = &[
    "php", "asp", "aspx", "jsp", "cgi", "pl", "py", "rb", "sh", "bat", "exe", "dll", "sql", "bak",
    "old", "log", "config", "ini", "yaml", "yml", "toml", "xml", "json",
];

fn blocked_prefix(path: &str) -> bool {
    BLOCKED_PREFIXES.iter().any(|p| path.starts_with(p))
}

fn blocked_extension(path: &str) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => BLOCKED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

#[derive(Clone, Default)]
pub struct ProbeFilter;

impl<S, B> Transform<S, ServiceRequest> for ProbeFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ProbeFilterService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ProbeFilterService { service }))
    }
}

pub struct ProbeFilterService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ProbeFilterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();

        if blocked_prefix(&path) {
            tracing::warn!(path = %path, "blocked directory enumeration attempt");
            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, format!("{path}/redirect")))
                .finish();
            let res = req.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        if blocked_extension(&path) {
            tracing::warn!(path = %path, "blocked scanner path");
            let res = req
                .into_response(HttpResponse::NotFound().finish())
                .map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_prefixes() {
        assert!(blocked_prefix("/wp-admin"));
        assert!(blocked_prefix("/wp-admin/setup.html"));
        assert!(blocked_prefix("/.env"));
        assert!(!blocked_prefix("/p/a8b92cDdX01p1"));
        assert!(!blocked_prefix("/api/videos"));
    }

    #[test]
    fn test_blocked_extensions() {
        assert!(blocked_extension("/index.php"));
        assert!(blocked_extension("/db.SQL"));
        assert!(blocked_extension("/settings.yaml"));
        assert!(!blocked_extension("/api/videos"));
        assert!(!blocked_extension("/offline"));
    }
}
