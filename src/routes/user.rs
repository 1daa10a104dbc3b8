use crate::models::user::{CreateUserRequest, ErrorResponse, LoginRequest, User};
use crate::store::{NewUser, UserStoreError};
use crate::usecase::UserService;
use crate::validation::syntax;
use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

/// # User Registration Endpoint
///
/// Registers a new user. The email must be unique across the system; the
/// store assigns `id` and `createdAt`.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `name` and `email` fields
///
/// ## Responses
/// - **201 Created**: full user record
/// - **400 Bad Request**:
///   - Missing fields or wrong types (rejected before this handler runs)
///   - Empty name or invalid email syntax (store is not called)
///   - Email already registered
///
/// ## Example Request
/// ```json
/// { "name": "Carlos Silva", "email": "carlos@empresa.com" }
/// ```
///
/// ## Example Error Response
/// ```json
/// { "error": "Usuário já existente" }
/// ```
#[utoipa::path(
    post,
    path = "/",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Usuário criado com sucesso", body = User),
        (status = 400, description = "Erro na requisição", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[post("/")]
pub async fn create_user(
    req: web::Json<CreateUserRequest>,
    service: web::Data<UserService>,
) -> Result<impl Responder, actix_web::Error> {
    let name = req.name.trim();
    let email = req.email.trim();

    // Shape checks happen before the service is touched
    if name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Nome é obrigatório"
        })));
    }

    if !syntax::is_valid_email(email) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Email inválido"
        })));
    }

    let input = NewUser {
        name: name.to_string(),
        email: email.to_string(),
    };

    match service.create(input).await {
        Ok(user) => Ok(HttpResponse::Created().json(user)),
        Err(err) => {
            tracing::error!(error = %err, "Erro ao criar usuário");

            // Only the duplicate-email rejection carries its own message;
            // anything else collapses into the generic fallback.
            let message = match &err {
                UserStoreError::DuplicateEmail => err.to_string(),
                UserStoreError::Backend(_) => "Erro interno do servidor".to_string(),
            };

            Ok(HttpResponse::BadRequest().json(json!({ "error": message })))
        }
    }
}

/// # User Login Endpoint
///
/// Checks whether the email exists in the system and returns the matching
/// record. This is an existence lookup only; no credential of any kind is
/// verified.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with an `email` field
///
/// ## Responses
/// - **200 OK**: user found, full record returned
/// - **400 Bad Request**: malformed body or invalid email syntax
/// - **404 Not Found**: no user with that email
/// - **500 Internal Server Error**: store failure
///
/// ## Example Request
/// ```json
/// { "email": "carlos@empresa.com" }
/// ```
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Usuário encontrado", body = User),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse),
        (status = 500, description = "Erro interno", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[post("/login")]
pub async fn login(
    req: web::Json<LoginRequest>,
    service: web::Data<UserService>,
) -> Result<impl Responder, actix_web::Error> {
    let email = req.email.trim();

    if !syntax::is_valid_email(email) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Email inválido"
        })));
    }

    match service.find_by_email(email).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(user)),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Usuário não encontrado"
        }))),
        Err(err) => {
            tracing::error!(error = %err, "Erro ao fazer login");
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Erro interno no servidor"
            })))
        }
    }
}

/// Configures user routes at the application root
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user).service(login);
}
