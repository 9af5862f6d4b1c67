use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod invoice;
pub mod policy;
pub mod render;
pub mod storage;

use crate::render::{FontError, FontSet};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

/// Resources the server refuses to start without.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("font configuration error: {0}")]
    Fonts(#[from] FontError),
    #[error("invoices directory is not writable: {0}")]
    Storage(#[source] std::io::Error),
}

/// Shared per-worker state: the loaded fonts and the output directory.
/// Both are immutable after startup, so requests share them without locks.
pub struct AppState {
    pub fonts: FontSet,
    pub invoices_dir: PathBuf,
}

impl AppState {
    pub fn from_env() -> Result<Self, StartupError> {
        let fonts = FontSet::load_from_env()?;
        let invoices_dir = storage::invoices_dir();
        storage::ensure_writable(&invoices_dir).map_err(StartupError::Storage)?;
        Ok(Self {
            fonts,
            invoices_dir,
        })
    }
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::invoice::handlers::render_invoice,
            crate::invoice::handlers::download_invoice,
        ),
        components(
            schemas(
                invoice::models::InvoiceRequest,
                invoice::models::Issuer,
                invoice::models::Customer,
                invoice::models::InvoiceMeta,
                invoice::models::ServiceLine,
                invoice::validation::ValidationError,
                invoice::handlers::ValidationFailureResponse,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Invoice Service", description = "Invoice rendering and retrieval endpoints.")
        ),
        servers(
            (url = "http://127.0.0.1:8080", description = "Localhost server")
        )
    )]
    struct ApiDoc;

    // Fonts and the output directory are configuration; failing either must
    // halt before any request-specific processing.
    let app_state = match AppState::from_env() {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!(
                "Startup failed. Check FONTS_DIR (regular.ttf/bold.ttf) and INVOICES_DIR. Error: {}",
                e
            );
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("racun_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    log::info!("Starting server at http://{}", bind_addr);

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/invoices")
                            .route(web::post().to(invoice::handlers::render_invoice)),
                    )
                    .service(
                        web::resource("/invoices/{filename}")
                            .route(web::get().to(invoice::handlers::download_invoice)),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&bind_addr)?
    .run()
    .await
}
