//! API-key middleware.
//!
//! Every request must carry an `x-api-key` header matching the configured
//! key. The liveness probe is exempt so orchestrators can poll it without
//! credentials. Rejections short-circuit before routing with a 401 JSON
//! body.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::types::ErrorResponse;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Paths reachable without a key
const PUBLIC_PATHS: &[&str] = &["/healthz"];

pub struct ApiKeyAuth {
    key: String,
}

impl ApiKeyAuth {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self { key: key.into() }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthMiddleware {
            service,
            key: self.key.clone(),
        }))
    }
}

pub struct ApiKeyAuthMiddleware<S> {
    service: S,
    key: String,
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthMiddleware<S>
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
        let public = PUBLIC_PATHS.contains(&req.path());

        let presented = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        if public || presented == Some(self.key.as_str()) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        warn!(
            "Rejected request to {}: missing or invalid API key",
            req.path()
        );

        let (req, _payload) = req.into_parts();
        let res = HttpResponse::Unauthorized()
            .json(ErrorResponse::new("invalid or missing API key"))
            .map_into_right_body();

        Box::pin(ready(Ok(ServiceResponse::new(req, res))))
    }
}
