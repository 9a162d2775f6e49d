//! Résumé PDF reading. Only the first page is used.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

use crate::text::normalize_whitespace;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("uploaded resume is empty")]
    Empty,

    #[error("resume PDF has no pages")]
    NoPages,

    #[error("could not read resume PDF: {0}")]
    Malformed(String),
}

/// Extracts the text of page one, with whitespace normalized
/// (lines trimmed, inner runs collapsed, blank lines dropped).
///
/// Text on later pages is discarded. The PDF reader runs on the blocking pool; if it panics
/// on a damaged file the panic is reported as `PdfError::Malformed`.
pub async fn extract_first_page_text(pdf: Bytes) -> Result<String, PdfError> {
    if pdf.is_empty() {
        return Err(PdfError::Empty);
    }

    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&pdf)
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            PdfError::Malformed("PDF reader aborted on this file".to_string())
        } else {
            PdfError::Malformed(e.to_string())
        }
    })?
    .map_err(|e| PdfError::Malformed(e.to_string()))?;

    let page_count = pages.len();
    let first = pages.into_iter().next().ok_or(PdfError::NoPages)?;
    if page_count > 1 {
        warn!("Resume has {page_count} pages; only the first page is used");
    }

    let text = normalize_whitespace(&first);
    debug!("Extracted resume text:\n{}", text);
    Ok(text)
}
