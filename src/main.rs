use actix_web::{App, HttpServer, web::Data};
use mongodb::Client;
use std::sync::Arc;
use user_registry::openapi::ApiDoc;
use user_registry::store::mongo::MongoUserStore;
use user_registry::usecase::UserService;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// User Registry Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - User registration and login-by-email endpoints
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - A MongoDB-backed user store shared across workers
///
/// # Endpoints
/// - Health check: `GET /`
/// - Create user: `POST /`
/// - Login: `POST /login`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default
/// - Environment variables loaded from `.env` file (if present)
/// - `MONGODB_URI`, `DB_NAME`, `DB_USERS_COLLECTION` select the store
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mongo_uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&mongo_uri)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let service = UserService::new(Arc::new(MongoUserStore::new(&client)));

    tracing::info!("Rotas de usuário foram carregadas");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(service.clone()))
            .configure(user_registry::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
