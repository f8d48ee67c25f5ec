//! Resume Analysis — scores resume text for ATS compatibility and suggests improvements.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::flows::prompts::{RESUME_ANALYSIS_SYSTEM, RESUME_ANALYSIS_TEMPLATE};
use crate::flows::{invoke, FlowDefinition, FlowError};
use crate::llm_client::prompts::SchemaField;
use crate::llm_client::LlmProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisRequest {
    pub resume_content: String,
}

impl ResumeAnalysisRequest {
    fn fields(&self) -> [(&'static str, &str); 1] {
        [("resumeContent", self.resume_content.as_str())]
    }
}

/// Model verdict on a resume.
///
/// `ats_score` is expected in 0–100 but is passed through unclamped, keeping
/// the model's own number representation (`72` stays `72`, not `72.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisResult {
    pub ats_score: Number,
    pub recommendations: String,
}

pub const INPUT_FIELDS: &[SchemaField] = &[SchemaField::string(
    "resumeContent",
    "The content of the resume to be analyzed.",
)];

pub const OUTPUT_FIELDS: &[SchemaField] = &[
    SchemaField::number("atsScore", "The ATS score of the resume (0-100)."),
    SchemaField::string(
        "recommendations",
        "Specific recommendations for improving the resume for ATS compatibility.",
    ),
];

pub const RESUME_ANALYSIS_FLOW: FlowDefinition = FlowDefinition {
    name: "analyzeResumeContentFlow",
    input: INPUT_FIELDS,
    output: OUTPUT_FIELDS,
    system: RESUME_ANALYSIS_SYSTEM,
    template: RESUME_ANALYSIS_TEMPLATE,
};

/// Scores `request.resume_content` with one model call.
pub async fn analyze_resume_content(
    llm: &dyn LlmProvider,
    request: &ResumeAnalysisRequest,
) -> Result<ResumeAnalysisResult, FlowError> {
    invoke(llm, &RESUME_ANALYSIS_FLOW, &request.fields()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::ScriptedLlm;

    const RESUME: &str = "Jane Doe — Backend Engineer. 6 years building payment systems in Go and \
        Rust. Led migration of settlement service to event sourcing; cut reconciliation time \
        from 4 hours to 20 minutes. Skills: Go, Rust, PostgreSQL, Kafka, Kubernetes.";

    fn request() -> ResumeAnalysisRequest {
        ResumeAnalysisRequest {
            resume_content: RESUME.to_string(),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_returns_reply_unchanged() {
        let llm = ScriptedLlm::replying(
            r#"{"atsScore": 72, "recommendations": "Add more quantifiable achievements."}"#,
        );

        let result = analyze_resume_content(&llm, &request()).await.unwrap();

        assert_eq!(
            result,
            ResumeAnalysisResult {
                ats_score: Number::from(72),
                recommendations: "Add more quantifiable achievements.".to_string(),
            }
        );
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_prompt_contains_full_resume() {
        let llm = ScriptedLlm::replying(r#"{"atsScore": 50, "recommendations": "ok"}"#);
        analyze_resume_content(&llm, &request()).await.unwrap();

        let prompt = llm.last_prompt();
        assert_eq!(prompt.matches(RESUME).count(), 1);
    }

    #[tokio::test]
    async fn test_missing_score_is_schema_mismatch() {
        let llm = ScriptedLlm::replying(r#"{"recommendations": "Add more keywords."}"#);
        let err = analyze_resume_content(&llm, &request()).await.unwrap_err();
        assert!(matches!(err, FlowError::SchemaMismatch { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_string_score_is_schema_mismatch() {
        let llm = ScriptedLlm::replying(r#"{"atsScore": "72", "recommendations": "x"}"#);
        let err = analyze_resume_content(&llm, &request()).await.unwrap_err();
        assert!(matches!(err, FlowError::SchemaMismatch { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_schema_mismatch() {
        let llm = ScriptedLlm::replying("Score: 72. Recommendations: add keywords.");
        let err = analyze_resume_content(&llm, &request()).await.unwrap_err();
        assert!(matches!(err, FlowError::SchemaMismatch { .. }));
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_not_clamped() {
        let llm = ScriptedLlm::replying(r#"{"atsScore": 150, "recommendations": "n/a"}"#);
        let result = analyze_resume_content(&llm, &request()).await.unwrap();
        assert_eq!(result.ats_score, Number::from(150));
    }

    #[tokio::test]
    async fn test_extra_reply_keys_are_ignored() {
        let llm = ScriptedLlm::replying(
            r#"{"atsScore": 88.5, "recommendations": "Tighten summary.", "confidence": "high"}"#,
        );
        let result = analyze_resume_content(&llm, &request()).await.unwrap();
        assert_eq!(result.ats_score.as_f64(), Some(88.5));
    }

    #[tokio::test]
    async fn test_provider_failure_is_transport_error() {
        let llm = ScriptedLlm::failing(503);
        let err = analyze_resume_content(&llm, &request()).await.unwrap_err();
        assert!(matches!(err, FlowError::Transport { .. }));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_does_not_carry_into_next_call() {
        let llm = ScriptedLlm::new(vec![
            Err(500),
            Ok(r#"{"atsScore": 64, "recommendations": "Use standard headings."}"#),
        ]);

        let first = analyze_resume_content(&llm, &request()).await;
        let second = analyze_resume_content(&llm, &request()).await;

        assert!(first.is_err());
        assert_eq!(second.unwrap().ats_score, Number::from(64));
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_integer_score_serializes_without_fraction() {
        let llm = ScriptedLlm::replying(r#"{"atsScore": 72, "recommendations": "ok"}"#);
        let result = analyze_resume_content(&llm, &request()).await.unwrap();
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"atsScore":72,"recommendations":"ok"}"#
        );
    }

    #[test]
    fn test_request_fields_match_declared_input_schema() {
        let req = request();
        let names: Vec<&str> = req.fields().iter().map(|(name, _)| *name).collect();
        let declared: Vec<&str> = INPUT_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, declared);
    }

    #[test]
    fn test_request_uses_camel_case_wire_name() {
        let req: ResumeAnalysisRequest =
            serde_json::from_str(r#"{"resumeContent": "text"}"#).unwrap();
        assert_eq!(req.resume_content, "text");
    }
}
