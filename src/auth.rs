use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::HeaderMap;
use actix_web::{Error, HttpResponse};
use serde_json::json;
use std::future::{Ready, ready};
use std::pin::Pin;

/// Outcome of inspecting a request's headers.
///
/// The middleware must match on this exhaustively: a `Reject` always
/// short-circuits, so "response sent but processing continues" cannot be
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Reject,
}

/// Checks the request for the `email` header the guard requires.
pub fn inspect_headers(headers: &HeaderMap) -> GuardDecision {
    if headers.contains_key("email") {
        GuardDecision::Allow
    } else {
        GuardDecision::Reject
    }
}

/// # Email Header Guard
///
/// Middleware rejecting requests that lack an `email` header.
///
/// ## Behavior
/// - Header present: request proceeds to the wrapped service untouched.
/// - Header absent: responds **401 Unauthorized** with
///   `{"message": "E-mail é obrigatório"}`; the wrapped service is never
///   called.
///
/// Not mounted on the user routes; wrap a scope with it where the header
/// requirement applies.
pub struct EmailGuard;

impl<S, B> Transform<S, ServiceRequest> for EmailGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = EmailGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(EmailGuardMiddleware { service }))
    }
}

pub struct EmailGuardMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for EmailGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match inspect_headers(req.headers()) {
            GuardDecision::Allow => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            GuardDecision::Reject => {
                let (req, _payload) = req.into_parts();
                let response = HttpResponse::Unauthorized()
                    .json(json!({ "message": "E-mail é obrigatório" }))
                    .map_into_right_body();

                Box::pin(ready(Ok(ServiceResponse::new(req, response))))
            }
        }
    }
}
