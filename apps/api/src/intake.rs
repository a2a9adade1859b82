//! Intake — extracts plain text from the two uploaded documents.
//!
//! Runs before any model call: an unreadable document aborts the request with
//! a 422 and the pipeline never starts.

use crate::errors::AppError;

/// An uploaded resume or job-description file, as received from the form.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Extracts text from an uploaded document based on its file extension.
/// PDFs go through `pdf-extract`; `.txt` and `.md` are read as UTF-8.
pub fn extract_text(doc: &UploadedDocument) -> Result<String, AppError> {
    let lower_name = doc.file_name.to_lowercase();

    let text = if lower_name.ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(&doc.bytes).map_err(|e| {
            AppError::UnreadableDocument(format!(
                "Could not extract text from '{}': {e}",
                doc.file_name
            ))
        })?
    } else if lower_name.ends_with(".txt") || lower_name.ends_with(".md") {
        String::from_utf8(doc.bytes.clone()).map_err(|_| {
            AppError::UnreadableDocument(format!("'{}' is not valid UTF-8 text", doc.file_name))
        })?
    } else {
        return Err(AppError::UnreadableDocument(format!(
            "Unsupported file format: '{}'. Upload a .pdf, .txt, or .md file",
            doc.file_name
        )));
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::UnreadableDocument(format!(
            "'{}' contains no extractable text (scanned image?)",
            doc.file_name
        )));
    }

    Ok(text)
}
