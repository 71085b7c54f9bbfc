//! Setup synthesis.
//!
//! One backend call that turns a free-form character/background description
//! into a [`SetupRecord`]. The visual style and negative prompt are authored
//! locally and the model is instructed to echo them back unchanged in the
//! designated schema fields.

use serde_json::json;

use scenescribe_core::{CredentialSet, GenerateRequest};
use scenescribe_error::{ConvertError, ConvertErrorKind, ScenescribeResult};
use scenescribe_interface::ScenescribeDriver;
use scenescribe_models::RotatingExecutor;

use crate::AspectRatio;
use crate::extract::extract_json;
use crate::records::SetupRecord;
use crate::style::visual_style_and_negative_prompt;

/// Model used for setup synthesis.
pub(crate) const SETUP_MODEL: &str = "gemini-2.5-flash";

pub(crate) const JSON_MIME: &str = "application/json";

/// Synthesize the setup record from a free-form description.
///
/// # Errors
///
/// Fails with [`ConvertErrorKind::SetupGeneration`] when the backend call
/// fails (including credential exhaustion) or the response does not parse
/// into a [`SetupRecord`]. Character presence is checked later by the
/// assembler, not here.
#[tracing::instrument(skip_all, fields(aspect = %aspect))]
pub async fn synthesize_setup<D: ScenescribeDriver>(
    executor: &RotatingExecutor<D>,
    description: &str,
    aspect: AspectRatio,
    credentials: &CredentialSet,
) -> ScenescribeResult<SetupRecord> {
    let (visual_style, negative_prompt) = visual_style_and_negative_prompt(aspect);

    let request = GenerateRequest::builder()
        .model(SETUP_MODEL)
        .prompt(setup_prompt(description, &visual_style, &negative_prompt))
        .response_schema(Some(setup_schema()))
        .response_mime_type(Some(JSON_MIME.to_string()))
        .build()
        .map_err(|e| ConvertError::new(ConvertErrorKind::SetupGeneration(e.to_string())))?;

    let response = executor
        .execute(credentials, &request)
        .await
        .map_err(|e| ConvertError::new(ConvertErrorKind::SetupGeneration(e.to_string())))?;

    let json = extract_json(&response.text)
        .map_err(|e| ConvertError::new(ConvertErrorKind::SetupGeneration(e.to_string())))?;

    let record: SetupRecord = serde_json::from_str(&json)
        .map_err(|e| ConvertError::new(ConvertErrorKind::SetupGeneration(e.to_string())))?;

    tracing::debug!(
        characters = record.character_lock.len(),
        backgrounds = record.background_lock.len(),
        "setup synthesis complete"
    );

    Ok(record)
}

fn setup_prompt(description: &str, visual_style: &str, negative_prompt: &str) -> String {
    format!(
        "You are an expert video production assistant. Analyze the description below and \
         create a complete setup JSON object. The JSON must have four top-level keys: \
         'character_lock', 'background_lock', 'visual_style', and 'negative_prompt'.

- From the description, extract all details for a single character and place them in an \
object. This character object should be the value for the key 'CHAR_1' inside the \
'character_lock' object. Ensure the character 'id' is 'CHAR_1'.
- From the description, extract all details for a single background setting and place \
them in an object. This background object should be the value for the key 'BACKGROUND_1' \
inside the 'background_lock' object. Ensure the background 'id' is 'BACKGROUND_1'.
- Use the exact 'visual_style' text provided below.
- Use the exact 'negative_prompt' text provided below.

Description:
---
{description}
---

Visual Style Text:
---
{visual_style}
---

Negative Prompt Text:
---
{negative_prompt}
---
"
    )
}

fn setup_schema() -> serde_json::Value {
    let character_schema = json!({
        "type": "OBJECT",
        "properties": {
            "id": { "type": "STRING", "description": "Character ID, must be CHAR_1" },
            "name": { "type": "STRING" },
            "species": { "type": "STRING" },
            "gender": { "type": "STRING" },
            "age": { "type": "STRING" },
            "voice_personality": { "type": "STRING" },
            "body_build": { "type": "STRING" },
            "face_shape": { "type": "STRING" },
            "hair": { "type": "STRING" },
            "skin_or_fur_color": { "type": "STRING" },
            "signature_feature": { "type": "STRING" },
            "outfit_top": { "type": "STRING" },
            "outfit_bottom": { "type": "STRING" },
            "helmet_or_hat": { "type": "STRING" },
            "shoes_or_footwear": { "type": "STRING" },
            "props": { "type": "STRING" },
            "body_metrics": { "type": "STRING" },
        },
        "required": ["id", "name"]
    });

    let background_schema = json!({
        "type": "OBJECT",
        "properties": {
            "id": { "type": "STRING", "description": "Background ID, must be BACKGROUND_1" },
            "name": { "type": "STRING" },
            "setting": { "type": "STRING" },
            "scenery": { "type": "STRING" },
            "props": { "type": "STRING" },
            "lighting": { "type": "STRING" },
        },
        "required": ["id", "name"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "character_lock": {
                "type": "OBJECT",
                "properties": { "CHAR_1": character_schema }
            },
            "background_lock": {
                "type": "OBJECT",
                "properties": { "BACKGROUND_1": background_schema }
            },
            "visual_style": { "type": "STRING" },
            "negative_prompt": { "type": "STRING" }
        },
        "required": ["character_lock", "visual_style", "negative_prompt"]
    })
}
