use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, Request, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, info_span};

use crate::{
    encoder::EncodedImage,
    error::AppError,
    pages, table,
    vision::{extract_table_text, VisionClient},
};

const IMAGE_FIELD: &str = "image";

#[derive(Clone)]
pub struct AppState {
    pub vision: VisionClient,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

/// An uploaded file that passed the presence checks.
struct Upload {
    file_name: String,
    bytes: axum::body::Bytes,
}

pub fn router(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload_image))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(pages::landing())
}

async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    // An empty or non-multipart POST has no file field either.
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            debug!("upload is not multipart ({}), back to the form", rejection);
            return Ok(Redirect::to("/").into_response());
        }
    };

    let upload = read_upload(&mut multipart)
        .await
        .map_err(|e| upload_error(e, state.max_upload_bytes))?;

    let Some(upload) = upload else {
        debug!("no usable image in upload, back to the form");
        return Ok(Redirect::to("/").into_response());
    };

    info!(file_name = %upload.file_name, bytes = upload.bytes.len(), "received upload");

    let encoded = EncodedImage::from_bytes(&upload.bytes);
    drop(upload);
    debug!(encoded_len = encoded.len(), "image encoded");

    let reply = state.vision.complete(&encoded).await?;
    let content = extract_table_text(&reply)?;
    let table_html = table::to_html_table(&content);

    Ok(Html(pages::result(&table_html)).into_response())
}

/// Finds the `image` field. `None` when it is absent, has no file name, or
/// carries no bytes.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Upload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Ok(None);
        }

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }

        return Ok(Some(Upload { file_name, bytes }));
    }

    Ok(None)
}

fn upload_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::UploadTooLarge { limit }
    } else {
        AppError::Upload(err)
    }
}
