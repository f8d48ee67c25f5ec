// Shared prompt constants and prompt-building utilities.
// Each flow defines its own prompts.rs alongside it; this file holds the
// cross-cutting pieces: the JSON-only system fragment, the output-schema
// builder and the placeholder renderer.

use serde_json::{json, Map, Value};
use thiserror::Error;

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("template '{template}' references unknown placeholder '{placeholder}'")]
    UnknownPlaceholder {
        template: &'static str,
        placeholder: String,
    },

    #[error("template '{template}' never uses field '{field}'")]
    UnusedField {
        template: &'static str,
        field: String,
    },
}

/// JSON type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    String,
    Number,
}

impl FieldType {
    fn as_json_type(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
        }
    }
}

/// One named, required field of a flow's input or output record.
#[derive(Debug, Clone, Copy)]
pub struct SchemaField {
    pub name: &'static str,
    pub field_type: FieldType,
    pub description: &'static str,
}

impl SchemaField {
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            description,
        }
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Number,
            description,
        }
    }
}

/// Builds a JSON Schema object in which every listed field is required.
pub fn object_schema(fields: &[SchemaField]) -> Value {
    let mut properties = Map::new();
    for field in fields {
        properties.insert(
            field.name.to_string(),
            json!({
                "type": field.field_type.as_json_type(),
                "description": field.description,
            }),
        );
    }
    let required: Vec<&str> = fields.iter().map(|f| f.name).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Extends a flow's system prompt with the JSON-only rules and the expected output schema.
pub fn with_output_schema(system: &str, schema: &Value) -> String {
    let rendered = serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string());
    format!(
        "{system} {JSON_ONLY_SYSTEM}\n\nOUTPUT SCHEMA (return exactly one JSON object with all of these fields):\n{rendered}"
    )
}

/// A natural-language prompt with `{field}` placeholders.
///
/// Rendering is a single left-to-right pass: substituted values are never
/// rescanned, so user text containing `{...}` is copied verbatim. Every
/// supplied field must be used and every placeholder must have a value.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub body: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }

    /// Placeholder names in order of appearance, repeats included.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.body;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match placeholder_name(after) {
                Some(name) => {
                    names.push(name);
                    rest = &after[name.len() + 1..];
                }
                None => rest = after,
            }
        }
        names
    }

    pub fn render(&self, fields: &[(&str, &str)]) -> Result<String, TemplateError> {
        let extra: usize = fields.iter().map(|(_, value)| value.len()).sum();
        let mut out = String::with_capacity(self.body.len() + extra);
        let mut used = vec![false; fields.len()];
        let mut rest = self.body;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match placeholder_name(after) {
                Some(name) => {
                    let idx = fields
                        .iter()
                        .position(|(key, _)| *key == name)
                        .ok_or_else(|| TemplateError::UnknownPlaceholder {
                            template: self.name,
                            placeholder: name.to_string(),
                        })?;
                    out.push_str(fields[idx].1);
                    used[idx] = true;
                    rest = &after[name.len() + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);

        if let Some(idx) = used.iter().position(|u| !u) {
            return Err(TemplateError::UnusedField {
                template: self.name,
                field: fields[idx].0.to_string(),
            });
        }

        Ok(out)
    }
}

/// Returns the identifier of a `{name}` placeholder whose opening brace has
/// already been consumed, or `None` when the brace is literal text.
fn placeholder_name(after_brace: &str) -> Option<&str> {
    let end = after_brace.find('}')?;
    let name = &after_brace[..end];
    let is_ident = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_ident.then_some(name)
}
