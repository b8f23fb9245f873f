use serde::Serialize;
use utoipa::ToSchema;

use crate::services::recipient_list::Row;

#[derive(Debug, Serialize, ToSchema)]
pub struct CsvPreviewDTO {
    #[schema(examples("File uploaded and validated successfully."))]
    pub message: String,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Row>,
}
