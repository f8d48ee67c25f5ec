//! Mock Interview — coaches a candidate on one answer against a job description and resume.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{MOCK_INTERVIEW_SYSTEM, MOCK_INTERVIEW_TEMPLATE};
use crate::flows::{invoke, FlowDefinition, FlowError};
use crate::llm_client::prompts::SchemaField;
use crate::llm_client::LlmProvider;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewFeedbackRequest {
    pub job_description: String,
    pub resume: String,
    pub question: String,
    pub candidate_answer: String,
    /// Simulated delivery level, e.g. "Low", "Medium", "High".
    pub voice_modulation: String,
    /// Simulated confidence level, e.g. "Low", "Medium", "High".
    pub confidence_level: String,
}

impl InterviewFeedbackRequest {
    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("jobDescription", self.job_description.as_str()),
            ("resume", self.resume.as_str()),
            ("question", self.question.as_str()),
            ("candidateAnswer", self.candidate_answer.as_str()),
            ("voiceModulation", self.voice_modulation.as_str()),
            ("confidenceLevel", self.confidence_level.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewFeedbackResult {
    pub feedback: String,
    pub voice_modulation_feedback: String,
    pub confidence_level_feedback: String,
    pub answer_quality_feedback: String,
    pub advice: String,
}

pub const INPUT_FIELDS: &[SchemaField] = &[
    SchemaField::string(
        "jobDescription",
        "The job description for which the mock interview is being conducted.",
    ),
    SchemaField::string("resume", "The resume of the candidate."),
    SchemaField::string("question", "The interview question asked to the candidate."),
    SchemaField::string("candidateAnswer", "The candidate answer to the question."),
    SchemaField::string(
        "voiceModulation",
        "The candidate voice modulation during the answer.",
    ),
    SchemaField::string(
        "confidenceLevel",
        "The candidate confidence level during the answer.",
    ),
];

pub const OUTPUT_FIELDS: &[SchemaField] = &[
    SchemaField::string("feedback", "Feedback on the candidate answer."),
    SchemaField::string(
        "voiceModulationFeedback",
        "Feedback on the candidate voice modulation.",
    ),
    SchemaField::string(
        "confidenceLevelFeedback",
        "Feedback on the candidate confidence level.",
    ),
    SchemaField::string(
        "answerQualityFeedback",
        "Feedback on the quality of the candidate answer.",
    ),
    SchemaField::string(
        "advice",
        "Specific advice on how to improve the candidate responses.",
    ),
];

pub const MOCK_INTERVIEW_FLOW: FlowDefinition = FlowDefinition {
    name: "conductAiMockInterviewFlow",
    input: INPUT_FIELDS,
    output: OUTPUT_FIELDS,
    system: MOCK_INTERVIEW_SYSTEM,
    template: MOCK_INTERVIEW_TEMPLATE,
};

/// Produces five-part coaching feedback with one model call.
pub async fn conduct_ai_mock_interview(
    llm: &dyn LlmProvider,
    request: &InterviewFeedbackRequest,
) -> Result<InterviewFeedbackResult, FlowError> {
    invoke(llm, &MOCK_INTERVIEW_FLOW, &request.fields()).await
}
