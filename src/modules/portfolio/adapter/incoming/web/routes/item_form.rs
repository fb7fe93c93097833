use actix_multipart::form::{bytes::Bytes, json::Json, MultipartForm};
use serde::Deserialize;

use crate::modules::portfolio::application::ports::outgoing::UploadFile;

//
// ──────────────────────────────────────────────────────────
// Shared multipart form for item create / update
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub item_type: String,
    pub title: String,
    pub content: String,
}

/// `item` carries the JSON fields, `files` zero or more attachments.
#[derive(Debug, MultipartForm)]
pub struct ItemForm {
    pub item: Json<ItemPayload>,
    #[multipart(rename = "files")]
    pub files: Vec<Bytes>,
}

pub fn to_upload_files(parts: Vec<Bytes>) -> Vec<UploadFile> {
    parts
        .into_iter()
        .map(|part| UploadFile {
            filename: part.file_name.unwrap_or_else(|| "file".to_string()),
            content_type: part
                .content_type
                .map(|m| m.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            bytes: part.data.to_vec(),
        })
        .collect()
}
