//! Text extraction for uploaded résumé documents (PDF and plain text).

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document format: {0}. Upload a PDF or plain-text file.")]
    UnsupportedFormat(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Text file is not valid UTF-8")]
    Encoding,

    #[error("Document contains no extractable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    pub fn mime_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::PlainText => "text/plain",
        }
    }
}

/// A file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Works out the document kind from the declared content type, falling back to the
/// file extension when the type is missing or generic.
pub fn detect_kind(file_name: &str, content_type: Option<&str>) -> Option<DocumentKind> {
    let declared = content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .unwrap_or_default();

    match declared.as_str() {
        "application/pdf" => return Some(DocumentKind::Pdf),
        "text/plain" | "text/markdown" => return Some(DocumentKind::PlainText),
        "" | "application/octet-stream" => {}
        _ => return None,
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())?;
    match extension.as_str() {
        "pdf" => Some(DocumentKind::Pdf),
        "txt" | "md" => Some(DocumentKind::PlainText),
        _ => None,
    }
}

/// Extracts plain text from an uploaded document.
///
/// CPU-bound for PDFs; call from `spawn_blocking` inside async handlers.
pub fn extract_text(doc: &UploadedDocument) -> Result<(DocumentKind, String), ExtractError> {
    let kind = detect_kind(&doc.file_name, doc.content_type.as_deref()).ok_or_else(|| {
        ExtractError::UnsupportedFormat(
            doc.content_type
                .clone()
                .unwrap_or_else(|| doc.file_name.clone()),
        )
    })?;

    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&doc.bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        DocumentKind::PlainText => String::from_utf8(doc.bytes.to_vec())
            .map_err(|_| ExtractError::Encoding)?,
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok((kind, text.to_string()))
}
