use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Confirms the API is up and serving requests.
///
/// ## Response
///
/// - **200 OK**: always
///   - Content-Type: `text/plain`
///   - Body: the literal string `hello world`
///
/// Independent of any request state; there is no failure path.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API em funcionamento", body = String)
    ),
    tag = "Health Check"
)]
#[get("/")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("hello world")
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
