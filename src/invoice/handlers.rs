use actix_files::NamedFile;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use serde::Serialize;
use utoipa::ToSchema;

use crate::render::generate_invoice;
use crate::{storage, AppState, ErrorResponse};

use super::models::InvoiceRequest;
use super::validation::{validate_request, ValidationError};

/// 400 body listing every field that failed validation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationFailureResponse {
    #[schema(example = "ValidationFailed")]
    pub error: String,
    pub errors: Vec<ValidationError>,
}

impl ValidationFailureResponse {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self {
            error: "ValidationFailed".to_string(),
            errors,
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Invoice Service",
    post,
    path = "/invoices",
    request_body = InvoiceRequest,
    responses(
        (status = 200, description = "Rendered invoice PDF (application/pdf)"),
        (status = 400, description = "Payload failed field validation", body = ValidationFailureResponse),
        (status = 500, description = "Rendering or persistence failed", body = ErrorResponse)
    )
)]
pub async fn render_invoice(
    req: web::Json<InvoiceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = req.into_inner();
    info!(
        "Rendering invoice {} for customer '{}' ({} line items)",
        payload.invoice.invoice_number,
        payload.customer.name,
        payload.services.len()
    );

    if let Err(errors) = validate_request(&payload) {
        return HttpResponse::BadRequest().json(ValidationFailureResponse::new(errors));
    }

    let state = data.clone();
    let rendered = web::block(move || -> Result<(String, Vec<u8>), String> {
        let generated =
            generate_invoice(&payload, &state.fonts).map_err(|e| e.to_string())?;
        storage::save_invoice(&state.invoices_dir, &generated.filename, &generated.pdf)
            .map_err(|e| e.to_string())?;
        Ok((generated.filename, generated.pdf))
    })
    .await;

    match rendered {
        Ok(Ok((filename, pdf))) => {
            info!("Invoice rendered and stored as {}", filename);
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(pdf)
        }
        Ok(Err(e)) => {
            error!("Invoice rendering failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Invoice rendering failed"))
        }
        Err(e) => {
            error!("Invoice rendering task failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Invoice rendering failed"))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Invoice Service",
    get,
    path = "/invoices/{filename}",
    responses(
        (status = 200, description = "Stored invoice PDF (application/pdf)"),
        (status = 404, description = "No stored invoice under that filename", body = ErrorResponse)
    ),
    params(
        ("filename" = String, Path, description = "Derived filename of a previously rendered invoice")
    )
)]
pub async fn download_invoice(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let filename: String = req.match_info().query("filename").into();
    info!("Serving stored invoice: {}", filename);

    match storage::invoice_path(&data.invoices_dir, &filename) {
        Some(path) if path.is_file() => match NamedFile::open(path) {
            Ok(file) => file.into_response(&req),
            Err(e) => {
                error!("Failed to open stored invoice '{}': {}", filename, e);
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::internal_error("Failed to read stored invoice"))
            }
        },
        _ => HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "Invoice '{}' not found",
            filename
        ))),
    }
}
