//! AI flows — typed request → prompt → model → validated response.
//!
//! Each flow is a `FlowDefinition` (input fields, output schema, system prompt,
//! template) plus one async entry point. Flows hold no state; the model
//! capability is passed in by the caller on every invocation.

pub mod document;
pub mod handlers;
pub mod mock_interview;
pub mod prompts;
pub mod resume_analysis;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{object_schema, PromptTemplate, SchemaField, TemplateError};
use crate::llm_client::{call_json, LlmError, LlmProvider};

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{flow}: model call failed: {source}")]
    Transport {
        flow: &'static str,
        source: LlmError,
    },

    #[error("{flow}: reply does not match output schema: {source}")]
    SchemaMismatch {
        flow: &'static str,
        source: LlmError,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl FlowError {
    fn from_llm(flow: &'static str, source: LlmError) -> Self {
        if source.is_transport() {
            FlowError::Transport { flow, source }
        } else {
            FlowError::SchemaMismatch { flow, source }
        }
    }
}

impl From<FlowError> for AppError {
    fn from(e: FlowError) -> Self {
        AppError::Llm(e.to_string())
    }
}

/// Static description of one flow.
pub struct FlowDefinition {
    pub name: &'static str,
    pub input: &'static [SchemaField],
    pub output: &'static [SchemaField],
    pub system: &'static str,
    pub template: PromptTemplate,
}

/// Renders the flow's template from `fields`, calls the model once and
/// validates the reply against the flow's output schema.
///
/// Never retries and never substitutes defaults: any transport or schema
/// failure is returned to the caller.
pub async fn invoke<T: DeserializeOwned>(
    llm: &dyn LlmProvider,
    flow: &FlowDefinition,
    fields: &[(&str, &str)],
) -> Result<T, FlowError> {
    debug_assert!(
        flow.template
            .placeholders()
            .iter()
            .eq(flow.input.iter().map(|f| &f.name)),
        "flow {} template placeholders do not match its declared input fields",
        flow.name
    );

    let prompt = flow.template.render(fields)?;
    let schema = object_schema(flow.output);

    debug!(
        "Invoking flow {} on model {} ({} prompt chars)",
        flow.name,
        llm.model_name(),
        prompt.chars().count()
    );

    call_json::<T>(llm, &prompt, flow.system, &schema)
        .await
        .map_err(|e| {
            warn!("Flow {} failed: {e}", flow.name);
            FlowError::from_llm(flow.name, e)
        })
}
