//! Text extraction for uploaded PDF, DOCX and TXT documents.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; `NativeExtractor` is the default
//! backend and does all decoding in-process.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::intake::docx;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document type: {0}")]
    Unsupported(String),

    #[error("PDF could not be read: {0}")]
    Pdf(String),

    #[error("DOCX could not be read: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Resolves the kind from the declared media type, falling back to the file
    /// extension when the client sent no type or a generic binary one.
    pub fn detect(
        media_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, ExtractionError> {
        let media_type = media_type
            .map(|m| m.split(';').next().unwrap_or_default().trim().to_lowercase())
            .filter(|m| !m.is_empty());

        match media_type.as_deref() {
            Some(PDF_MEDIA_TYPE) => return Ok(DocumentKind::Pdf),
            Some(DOCX_MEDIA_TYPE) => return Ok(DocumentKind::Docx),
            Some(TEXT_MEDIA_TYPE) => return Ok(DocumentKind::PlainText),
            Some("application/octet-stream") | None => {}
            Some(other) => return Err(ExtractionError::Unsupported(other.to_string())),
        }

        let name = file_name.unwrap_or_default().to_lowercase();
        if name.ends_with(".pdf") {
            Ok(DocumentKind::Pdf)
        } else if name.ends_with(".docx") {
            Ok(DocumentKind::Docx)
        } else if name.ends_with(".txt") {
            Ok(DocumentKind::PlainText)
        } else {
            Err(ExtractionError::Unsupported(
                media_type.unwrap_or_else(|| "unknown".to_string()),
            ))
        }
    }
}

/// An uploaded resume file, already size-checked.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Extraction backend. Implement this to swap decoders without touching handlers.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: Document) -> Result<String, ExtractionError>;
}

/// In-process decoder: `pdf-extract` for PDF, `zip` + `quick-xml` for DOCX.
pub struct NativeExtractor;

#[async_trait]
impl TextExtractor for NativeExtractor {
    async fn extract(&self, document: Document) -> Result<String, ExtractionError> {
        debug!(
            kind = ?document.kind,
            file_name = document.file_name.as_deref().unwrap_or("-"),
            size = document.bytes.len(),
            "extracting resume text"
        );

        match document.kind {
            DocumentKind::PlainText => Ok(decode_plain_text(&document.bytes)),
            DocumentKind::Pdf => {
                let bytes = document.bytes;
                // pdf-extract can panic on malformed input; the join error catches it.
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                    .await
                    .map_err(|e| ExtractionError::Pdf(format!("decoder aborted: {e}")))?
                    .map_err(|e| ExtractionError::Pdf(e.to_string()))
            }
            DocumentKind::Docx => {
                let bytes = document.bytes;
                tokio::task::spawn_blocking(move || docx::extract_text(&bytes))
                    .await
                    .map_err(|e| ExtractionError::Docx(format!("decoder aborted: {e}")))?
            }
        }
    }
}

fn decode_plain_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(text.as_ref()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(kind: DocumentKind, bytes: &'static [u8]) -> Document {
        Document {
            kind,
            file_name: None,
            bytes: Bytes::from_static(bytes),
        }
    }

    #[test]
    fn test_detect_by_media_type() {
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), None).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(Some(DOCX_MEDIA_TYPE), Some("cv.bin")).unwrap(),
            DocumentKind::Docx
        );
        assert_eq!(
            DocumentKind::detect(Some("text/plain; charset=utf-8"), None).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), Some("CV.PDF")).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(None, Some("resume.docx")).unwrap(),
            DocumentKind::Docx
        );
        assert_eq!(
            DocumentKind::detect(None, Some("resume.txt")).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn test_detect_rejects_other_types() {
        assert!(matches!(
            DocumentKind::detect(Some("image/png"), Some("resume.pdf")),
            Err(ExtractionError::Unsupported(t)) if t == "image/png"
        ));
        assert!(matches!(
            DocumentKind::detect(None, Some("resume.rtf")),
            Err(ExtractionError::Unsupported(_))
        ));
    }

    #[tokio::test]
    async fn test_plain_text_strips_bom() {
        let text = NativeExtractor
            .extract(document(DocumentKind::PlainText, b"\xef\xbb\xbfHello CV"))
            .await
            .unwrap();
        assert_eq!(text, "Hello CV");
    }

    #[tokio::test]
    async fn test_plain_text_invalid_utf8_is_lossy() {
        let text = NativeExtractor
            .extract(document(DocumentKind::PlainText, b"caf\xe9"))
            .await
            .unwrap();
        assert!(text.starts_with("caf"));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_an_extraction_error() {
        let result = NativeExtractor
            .extract(document(DocumentKind::Pdf, b"definitely not a pdf"))
            .await;
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }

    #[tokio::test]
    async fn test_garbage_docx_is_an_extraction_error() {
        let result = NativeExtractor
            .extract(document(DocumentKind::Docx, b"PK not really a zip"))
            .await;
        assert!(matches!(result, Err(ExtractionError::Docx(_))));
    }
}
