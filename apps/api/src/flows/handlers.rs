//! Axum route handlers for the AI flows.
//!
//! Handlers do the form-level checks (minimum lengths, defaults) before a flow
//! is dispatched, then invoke exactly one flow. Flow failures surface as
//! `AppError::Llm`, which returns a generic message and logs the detail.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::flows::document::{detect_kind, extract_resume_text, MAX_UPLOAD_BYTES};
use crate::flows::mock_interview::{
    conduct_ai_mock_interview, InterviewFeedbackRequest, InterviewFeedbackResult,
};
use crate::flows::resume_analysis::{
    analyze_resume_content, ResumeAnalysisRequest, ResumeAnalysisResult,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Form rules
// ────────────────────────────────────────────────────────────────────────────

const MIN_RESUME_CHARS: usize = 100;
const MIN_JOB_DESCRIPTION_CHARS: usize = 50;
const MIN_QUESTION_CHARS: usize = 10;
const MIN_ANSWER_CHARS: usize = 20;

const DEFAULT_QUESTION: &str = "Tell me about yourself.";
const DEFAULT_LEVEL: &str = "Medium";

fn require_min_chars(label: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!(
            "{label} must be at least {min} characters."
        )));
    }
    Ok(())
}

fn upload_too_large() -> AppError {
    AppError::PayloadTooLarge(format!(
        "Uploaded file must be at most {} MiB.",
        MAX_UPLOAD_BYTES / (1024 * 1024)
    ))
}

/// Body-limit hits surface as 413; anything else is a malformed form.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        upload_too_large()
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

fn validate_resume_request(request: &ResumeAnalysisRequest) -> Result<(), AppError> {
    require_min_chars("Resume content", &request.resume_content, MIN_RESUME_CHARS)
}

/// Mock interview form as submitted by the client. Omitted question and
/// levels fall back to the form defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewForm {
    pub job_description: String,
    pub resume: String,
    #[serde(default = "default_question")]
    pub question: String,
    pub candidate_answer: String,
    #[serde(default = "default_level")]
    pub voice_modulation: String,
    #[serde(default = "default_level")]
    pub confidence_level: String,
}

fn default_question() -> String {
    DEFAULT_QUESTION.to_string()
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

impl InterviewForm {
    fn validate(self) -> Result<InterviewFeedbackRequest, AppError> {
        require_min_chars(
            "Job description",
            &self.job_description,
            MIN_JOB_DESCRIPTION_CHARS,
        )?;
        require_min_chars("Resume content", &self.resume, MIN_RESUME_CHARS)?;
        require_min_chars("Interview question", &self.question, MIN_QUESTION_CHARS)?;
        require_min_chars("Your answer", &self.candidate_answer, MIN_ANSWER_CHARS)?;

        Ok(InterviewFeedbackRequest {
            job_description: self.job_description,
            resume: self.resume,
            question: self.question,
            candidate_answer: self.candidate_answer,
            voice_modulation: self.voice_modulation,
            confidence_level: self.confidence_level,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/analyze
///
/// Scores pasted resume text for ATS compatibility.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeAnalysisRequest>, JsonRejection>,
) -> Result<Json<ResumeAnalysisResult>, AppError> {
    let Json(request) = payload?;
    validate_resume_request(&request)?;

    let result = analyze_resume_content(state.llm.as_ref(), &request).await?;
    info!("Resume analyzed: ats_score={}", result.ats_score);

    Ok(Json(result))
}

/// POST /api/v1/resume/analyze/upload
///
/// Multipart form with a `file` part (PDF or plain text, at most
/// `MAX_UPLOAD_BYTES`). The extracted text goes through the same checks and
/// flow as `/resume/analyze`.
pub async fn handle_analyze_resume_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResult>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await.map_err(multipart_error)?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(upload_too_large());
        }

        let kind = detect_kind(content_type.as_deref(), file_name.as_deref(), &data);
        upload = Some((kind, data));
        break;
    }

    let (kind, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' form field.".to_string()))?;

    let request = ResumeAnalysisRequest {
        resume_content: extract_resume_text(kind, data).await?,
    };
    validate_resume_request(&request)?;

    let result = analyze_resume_content(state.llm.as_ref(), &request).await?;
    info!("Uploaded resume analyzed ({:?}): ats_score={}", kind, result.ats_score);

    Ok(Json(result))
}

/// POST /api/v1/interview/feedback
///
/// Returns coaching feedback for one mock interview answer.
pub async fn handle_interview_feedback(
    State(state): State<AppState>,
    payload: Result<Json<InterviewForm>, JsonRejection>,
) -> Result<Json<InterviewFeedbackResult>, AppError> {
    let Json(form) = payload?;
    let request = form.validate()?;

    let result = conduct_ai_mock_interview(state.llm.as_ref(), &request).await?;
    info!("Mock interview feedback generated");

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> InterviewForm {
        serde_json::from_value(serde_json::json!({
            "jobDescription": "j".repeat(50),
            "resume": "r".repeat(100),
            "candidateAnswer": "a".repeat(20),
        }))
        .unwrap()
    }

    #[test]
    fn test_form_defaults_match_interview_page() {
        let request = form().validate().unwrap();
        assert_eq!(request.question, "Tell me about yourself.");
        assert_eq!(request.voice_modulation, "Medium");
        assert_eq!(request.confidence_level, "Medium");
    }

    #[test]
    fn test_form_rejects_short_job_description() {
        let mut f = form();
        f.job_description = "j".repeat(49);
        match f.validate() {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Job description must be at least 50 characters.")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_form_rejects_short_answer() {
        let mut f = form();
        f.candidate_answer = "too short".to_string();
        assert!(matches!(f.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        // 100 two-byte characters satisfy the 100-character minimum.
        let request = ResumeAnalysisRequest {
            resume_content: "é".repeat(100),
        };
        assert!(validate_resume_request(&request).is_ok());

        let request = ResumeAnalysisRequest {
            resume_content: "é".repeat(99),
        };
        assert!(validate_resume_request(&request).is_err());
    }
}
