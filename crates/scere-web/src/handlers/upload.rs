//! Gene-list upload parsing.
//!
//! A malformed file is user input, not a fault: the handler always
//! answers 200 with either the parsed table or an inert error message
//! the client can display.

use axum::body::Bytes;
use axum::Json;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UploadResponse {
    Ok {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Error {
        message: String,
    },
}

/// POST /api/upload - parse a CSV body into a preview table.
pub async fn upload(body: Bytes) -> Json<UploadResponse> {
    Json(parse_upload_bytes(&body))
}

// Decoded by hand: the String extractor would turn a mis-encoded file
// into a framework 400 before we could answer with the inert message.
fn parse_upload_bytes(body: &[u8]) -> UploadResponse {
    match std::str::from_utf8(body) {
        Ok(text) => parse_upload(text),
        Err(err) => UploadResponse::Error {
            message: format!("There was an error processing this file: {err}"),
        },
    }
}

fn parse_upload(body: &str) -> UploadResponse {
    match scere_db::parse_csv_table(body) {
        Ok(table) => UploadResponse::Ok {
            headers: table.headers,
            rows: table.rows,
        },
        Err(err) => UploadResponse::Error {
            message: format!("There was an error processing this file: {err}"),
        },
    }
}
