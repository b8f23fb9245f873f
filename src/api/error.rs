use actix_web::HttpResponse;

use crate::domain::error::AppResult;

/// Handler return type; every failure renders through `AppError`.
pub type ApiResult<T = HttpResponse> = AppResult<T>;
