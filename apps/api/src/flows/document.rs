//! Resume text extraction for uploaded files (PDF or plain text).

use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;

/// Upload size cap for resume files.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

/// Decides how to read an upload from its declared type, file name and leading bytes.
pub fn detect_kind(
    content_type: Option<&str>,
    file_name: Option<&str>,
    data: &[u8],
) -> DocumentKind {
    let declared_pdf = content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        || file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"));

    if declared_pdf || data.starts_with(PDF_MAGIC) {
        DocumentKind::Pdf
    } else {
        DocumentKind::PlainText
    }
}

/// Extracts the text of an uploaded resume.
///
/// PDF parsing runs on the blocking pool; a parser failure or panic is reported
/// as an unprocessable upload.
pub async fn extract_resume_text(kind: DocumentKind, data: Bytes) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty.".to_string()));
    }

    let text = match kind {
        DocumentKind::PlainText => String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::Validation("Uploaded file must be a PDF or UTF-8 text.".to_string())
        })?,
        DocumentKind::Pdf => {
            let extracted = tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
            })
            .await;
            match extracted {
                Ok(Ok(text)) => text,
                Ok(Err(e)) => {
                    warn!("PDF extraction failed: {e}");
                    return Err(unreadable_pdf());
                }
                Err(e) => {
                    warn!("PDF extraction task aborted: {e}");
                    return Err(unreadable_pdf());
                }
            }
        }
    };

    Ok(normalize_whitespace(&text))
}

fn unreadable_pdf() -> AppError {
    AppError::UnprocessableEntity("Could not read text from the uploaded PDF.".to_string())
}

/// Trims each line and collapses runs of blank lines left behind by PDF extraction.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}
