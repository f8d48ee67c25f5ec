// All LLM prompt constants for the AI flows.
// Placeholders use the wire names of the request fields, e.g. `{resumeContent}`.

use crate::llm_client::prompts::PromptTemplate;

/// System prompt for ATS resume scoring. JSON-only rules are appended by `call_json`.
pub const RESUME_ANALYSIS_SYSTEM: &str =
    "You are an expert resume analyzer specializing in Applicant Tracking Systems (ATS).";

pub const RESUME_ANALYSIS_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "analyzeResumeContentPrompt",
    r#"Evaluate the following resume content and provide an ATS score (0-100) and specific recommendations for improvement.

RESUME CONTENT:
{resumeContent}

Consider factors such as keyword optimization, formatting, section headers, and overall ATS compatibility.

Return a JSON object with this EXACT schema (no extra fields):
{
  "atsScore": 72,
  "recommendations": "Add a dedicated Skills section listing ..."
}

RULES:
1. `atsScore` MUST be a number between 0 and 100
2. `recommendations` MUST be specific and actionable, aimed at improving ATS compatibility
3. Base the evaluation ONLY on the resume content above"#,
);

/// System prompt for mock interview coaching.
pub const MOCK_INTERVIEW_SYSTEM: &str =
    "You are an AI-powered interview coach. You conduct mock interviews, \
    assess a candidate's performance and give honest, constructive feedback.";

pub const MOCK_INTERVIEW_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "conductAiMockInterviewPrompt",
    r#"Assess the candidate's answer in this mock interview.

JOB DESCRIPTION:
{jobDescription}

RESUME:
{resume}

QUESTION:
{question}

CANDIDATE ANSWER:
{candidateAnswer}

VOICE MODULATION (simulated): {voiceModulation}
CONFIDENCE LEVEL (simulated): {confidenceLevel}

Provide feedback on the candidate answer, voice modulation, and confidence level. Also give specific advice on how to improve the candidate's responses to common interview questions.

Return a JSON object with this EXACT schema (no extra fields):
{
  "feedback": "overall feedback",
  "voiceModulationFeedback": "feedback on voice modulation",
  "confidenceLevelFeedback": "feedback on confidence level",
  "answerQualityFeedback": "feedback on answer quality",
  "advice": "specific advice on how to improve"
}

Every field is REQUIRED and must be a non-empty string."#,
);
