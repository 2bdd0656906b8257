//! Conversion between command-line JSON and BSON documents.

use mongodb::bson::{Bson, Document};

use crate::error::AppError;

/// Parses a JSON object into a BSON document.
///
/// Extended JSON forms such as `{"$oid": "..."}` are understood.
///
/// # Errors
///
/// Returns [`AppError::InvalidDocument`] if the input is not valid JSON or
/// is not an object.
pub fn parse_document(input: &str) -> Result<Document, AppError> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| AppError::invalid_document(format!("malformed JSON: {e}")))?;

    match Bson::try_from(value).map_err(|e| AppError::invalid_document(e.to_string()))? {
        Bson::Document(document) => Ok(document),
        other => Err(AppError::invalid_document(format!(
            "expected a JSON object, got {:?}",
            other.element_type()
        ))),
    }
}

/// Like [`parse_document`], passing `None` through untouched.
pub fn parse_optional_document(input: Option<&str>) -> Result<Option<Document>, AppError> {
    input.map(parse_document).transpose()
}

/// Renders a document as relaxed extended JSON on one line.
pub fn render_document(document: Document) -> String {
    Bson::Document(document).into_relaxed_extjson().to_string()
}
