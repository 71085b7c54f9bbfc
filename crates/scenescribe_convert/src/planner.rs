//! Scene planning.
//!
//! One backend call that translates the narration script into English and
//! segments it into scene units. The segmentation rules (10-15 words per
//! scene, clause-boundary splits, total coverage) are policy carried in the
//! prompt; the core checks only the shape of what comes back.

use serde_json::json;

use scenescribe_core::{CredentialSet, GenerateRequest};
use scenescribe_error::{ConvertError, ConvertErrorKind, ScenescribeResult};
use scenescribe_interface::ScenescribeDriver;
use scenescribe_models::RotatingExecutor;

use crate::extract::extract_json;
use crate::records::ScenePlanUnit;
use crate::setup::JSON_MIME;

/// Model used for scene planning.
pub(crate) const PLANNER_MODEL: &str = "gemini-2.5-pro";

/// Plan the scene sequence for a narration script.
///
/// # Errors
///
/// Fails with [`ConvertErrorKind::ScenePlanning`] when the backend call
/// fails, the response does not parse, or the parsed plan is empty — an
/// empty plan is invalid, not a zero-scene result.
#[tracing::instrument(skip_all, fields(script_chars = script_text.len()))]
pub async fn plan_scenes<D: ScenescribeDriver>(
    executor: &RotatingExecutor<D>,
    script_text: &str,
    credentials: &CredentialSet,
) -> ScenescribeResult<Vec<ScenePlanUnit>> {
    let request = GenerateRequest::builder()
        .model(PLANNER_MODEL)
        .prompt(planner_prompt(script_text))
        .response_schema(Some(planner_schema()))
        .response_mime_type(Some(JSON_MIME.to_string()))
        .build()
        .map_err(|e| ConvertError::new(ConvertErrorKind::ScenePlanning(e.to_string())))?;

    let response = executor
        .execute(credentials, &request)
        .await
        .map_err(|e| ConvertError::new(ConvertErrorKind::ScenePlanning(e.to_string())))?;

    let json = extract_json(&response.text)
        .map_err(|e| ConvertError::new(ConvertErrorKind::ScenePlanning(e.to_string())))?;

    let plan: Vec<ScenePlanUnit> = serde_json::from_str(&json)
        .map_err(|e| ConvertError::new(ConvertErrorKind::ScenePlanning(e.to_string())))?;

    if plan.is_empty() {
        return Err(ConvertError::new(ConvertErrorKind::ScenePlanning(
            "the model returned an empty scene plan".to_string(),
        ))
        .into());
    }

    tracing::debug!(scenes = plan.len(), "scene planning complete");
    Ok(plan)
}

fn planner_prompt(script_text: &str) -> String {
    format!(
        "You are a meticulous AI video production director governed by a strict set of \
         laws. Your task is to process a Vietnamese script, translate it into English, \
         and break it down into a sequence of scenes for a text-to-video generation \
         pipeline. You must adhere to the following laws without fail.

**LAW 1: ABSOLUTE CONTENT INTEGRITY (VERBATIM LOCK)**
1. **COMPLETE & FAITHFUL TRANSLATION:** You MUST translate the ENTIRE Vietnamese script \
into English. The translation must be verbatim and faithful to the original's meaning \
and intent.
2. **ZERO TOLERANCE FOR ALTERATION:** It is STRICTLY FORBIDDEN to add, omit, summarize, \
or reinterpret any part of the original script during translation. The full translated \
text must represent 100% of the source text.

**LAW 2: SCRIPT CONTROL SYSTEM**
1. **STRICT SEGMENTATION:** After the complete translation, you MUST segment the entire \
English text into scenes. The 'scene_text' for each and every scene MUST contain between \
10 and 15 English words. This is a non-negotiable, critical rule.
2. **INTELLIGENT & LOGICAL SPLITTING:** Your highest priority when segmenting is to \
maintain a natural, conversational flow. You MUST split sentences at logical and \
grammatical breakpoints (e.g., after commas, at the end of clauses). Avoid nonsensical \
or abrupt cuts mid-phrase at all costs. The goal is for the dialogue in each scene to \
sound complete and make sense on its own, even though it's part of a larger script.
3. **TOTAL COVERAGE:** The combination of all 'scene_text' segments MUST perfectly \
reconstruct the complete, unabridged English translation. Not a single word from the \
translation should be dropped.

**Your Task:**
1. Perform a complete and faithful translation of the Vietnamese script below into \
English, following LAW 1.
2. Segment the entire translated text into scenes, strictly following LAW 2.
3. For EACH scene, write a clear, concise 'illustration_prompt' (in English). This \
prompt describes the visual that fills the larger portion of the screen beside the \
speaker. The prompt should be cinematic and metaphorical, not literal.
4. Output a single JSON array of scene objects.

**Vietnamese Script to Process:**
---
{script_text}
---

**JSON Output Structure (Array of Objects):**
- Each object must have 'scene_text' (the English segment, 10-15 words) and \
'illustration_prompt' (in English).
"
    )
}

fn planner_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "scene_text": {
                    "type": "STRING",
                    "description": "The spoken dialogue for this scene in English (10-15 words)."
                },
                "illustration_prompt": {
                    "type": "STRING",
                    "description": "A detailed English prompt for the illustrative part of the video."
                }
            },
            "required": ["scene_text", "illustration_prompt"]
        }
    })
}
