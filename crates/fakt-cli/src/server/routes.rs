//! Invoice extraction endpoint.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use fakt_core::{normalize, ExpenseGateway, ExtractionResult};

use super::error::ApiError;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

/// Shared handler state.
pub struct AppState<G> {
    pub gateway: Arc<G>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

/// Build the router exposing `POST /invoice`.
pub fn invoice_router<G: ExpenseGateway>(gateway: G, max_upload_bytes: usize) -> Router {
    let state = AppState {
        gateway: Arc::new(gateway),
    };

    Router::new()
        .route("/invoice", post(analyze_invoice::<G>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn analyze_invoice<G: ExpenseGateway>(
    State(state): State<AppState<G>>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResult>, ApiError> {
    let document = read_file_field(&mut multipart).await?;
    debug!(bytes = document.len(), "Invoice upload received");

    let fields = state.gateway.analyze(document).await?;
    let result = normalize(&fields);

    info!(
        fields = fields.len(),
        vat_id_found = !result.vat_id.is_empty(),
        address_found = !result.address.is_empty(),
        total = %result.total,
        "Invoice analyzed"
    );

    Ok(Json(result))
}

/// Bytes of the first `file` part; other parts are skipped.
async fn read_file_field(multipart: &mut Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            return Ok(field.bytes().await?.to_vec());
        }
    }

    Err(ApiError::MissingField(FILE_FIELD))
}
