use actix_multipart::{Multipart, MultipartError};
use actix_web::{HttpResponse, post};
use futures::TryStreamExt;

use utoipa_actix_web::service_config::ServiceConfig;

use crate::api::dto::recipient_list::CsvPreviewDTO;
use crate::api::error::ApiResult;
use crate::domain::error::AppError;
use crate::services::recipient_list::validate_recipient_csv;

const FILE_FIELD: &str = "file";

const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(csv_validate);
}

fn malformed(error: MultipartError) -> AppError {
    AppError::BadRequest("Upload could not be read.").trace(&error.to_string())
}

async fn read_file(mut payload: Multipart) -> ApiResult<Option<Vec<u8>>> {
    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let mut data = Vec::new();

        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            if data.len() + chunk.len() > MAX_FILE_SIZE {
                return Err(AppError::BadRequest("File is too large."));
            }
            data.extend_from_slice(&chunk);
        }

        return Ok(Some(data));
    }

    Ok(None)
}

/// Checks the columns of an uploaded recipient list and previews its first rows.
#[utoipa::path(
    responses(
        (status = 200, body = CsvPreviewDTO, description = "Columns are valid"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
    ),
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "CSV file in the `file` field"),
    tag = "Recipients",
)]
#[post("/csv-validate")]
pub async fn csv_validate(payload: Multipart) -> ApiResult {
    let data = read_file(payload)
        .await?
        .ok_or_else(|| AppError::BadRequest("No file uploaded."))?;

    let rows = validate_recipient_csv(&data)?;

    Ok(HttpResponse::Ok().json(CsvPreviewDTO {
        message: "File uploaded and validated successfully.".to_string(),
        data: rows,
    }))
}
