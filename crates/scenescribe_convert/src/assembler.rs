//! Deterministic scene assembly.
//!
//! Merges the planner output with the setup record and the fixed content
//! tables into final per-scene records. No backend calls and no partial
//! output: assembly either produces every record or fails.

use std::collections::BTreeMap;

use scenescribe_core::word_count;
use scenescribe_error::{ConvertError, ConvertErrorKind, JsonError, ScenescribeResult};

use crate::AspectRatio;
use crate::records::{ConversionStats, DialogueLine, Profile, ScenePlanUnit, SceneRecord, SetupRecord};
use crate::style::layout_sentence;
use crate::tables::{ACTION_FLOWS, ActionFlow, Foley, POSES, Pose};

/// Speaking rate used for duration estimates.
const WORDS_PER_SECOND: f64 = 2.5;
const MIN_SCENE_SECONDS: u32 = 3;
const MAX_SCENE_SECONDS: u32 = 8;

/// Assemble the final scene records from a setup and a scene plan.
///
/// Scenes keep the plan's order; `scene_id` is the 1-based index as a
/// string. Poses and action flows are selected by scene index modulo the
/// table length, so long plans reuse them round-robin.
///
/// # Errors
///
/// Fails with [`ConvertErrorKind::MissingCharacter`] when the setup has no
/// character entry. A missing background is not an error: those scenes get
/// an empty `background_lock`.
pub fn assemble(
    setup: &SetupRecord,
    plan: &[ScenePlanUnit],
    aspect: AspectRatio,
    voice_instructions: &str,
) -> ScenescribeResult<(Vec<SceneRecord>, ConversionStats)> {
    let character = setup
        .character()
        .ok_or_else(|| ConvertError::new(ConvertErrorKind::MissingCharacter))?;
    let background = setup.background();

    let mut scenes = Vec::with_capacity(plan.len());
    let mut total_duration_sec = 0u32;
    let mut total_words = 0usize;

    for (index, unit) in plan.iter().enumerate() {
        let words = word_count(&unit.scene_text);
        let duration_sec = scene_duration(words);
        total_duration_sec += duration_sec;
        total_words += words;

        let pose = &POSES[index % POSES.len()];
        let action_flow = &ACTION_FLOWS[index % ACTION_FLOWS.len()];

        let mut character_lock = BTreeMap::new();
        character_lock.insert(
            character.id.clone(),
            posed_character(character, pose, action_flow)?,
        );

        let mut background_lock = BTreeMap::new();
        if let Some(background) = background {
            background_lock.insert(background.id.clone(), background.clone());
        }

        let prompt = format!("{} {}", layout_sentence(aspect), unit.illustration_prompt);
        let delivery = format!("{}. {}", pose.expression, voice_instructions.trim());

        scenes.push(SceneRecord {
            scene_id: (index + 1).to_string(),
            duration_sec,
            visual_style: setup.visual_style.clone(),
            negative_prompt: setup.negative_prompt.clone(),
            character_lock,
            background_lock,
            prompt,
            foley_and_ambience: Foley::default(),
            dialogue: vec![DialogueLine {
                speaker: character.id.clone(),
                language: "en-US".to_string(),
                line: unit.scene_text.clone(),
                delivery,
            }],
            lip_sync_director_note: lip_sync_note(&character.id, duration_sec),
        });
    }

    let stats = ConversionStats {
        scene_count: plan.len(),
        total_duration_sec,
        total_words,
    };

    Ok((scenes, stats))
}

/// Spoken duration for a scene, clamped to the 3-8 second window.
///
/// With the planner constrained to 10-15 words the raw value already lands
/// inside the window; the clamp covers off-policy segments.
fn scene_duration(words: usize) -> u32 {
    let raw = (words as f64 / WORDS_PER_SECOND).round() as u32;
    raw.clamp(MIN_SCENE_SECONDS, MAX_SCENE_SECONDS)
}

/// The character profile merged with this scene's pose fields and action
/// flow. Pose fields overwrite same-named profile attributes.
fn posed_character(
    character: &Profile,
    pose: &Pose,
    action_flow: &ActionFlow,
) -> ScenescribeResult<serde_json::Map<String, serde_json::Value>> {
    let mut entry = serde_json::Map::new();
    entry.insert(
        "id".to_string(),
        serde_json::Value::String(character.id.clone()),
    );
    for (key, value) in &character.attributes {
        entry.insert(key.clone(), value.clone());
    }

    let pose_fields =
        serde_json::to_value(pose).map_err(|e| JsonError::new(e.to_string()))?;
    if let serde_json::Value::Object(fields) = pose_fields {
        for (key, value) in fields {
            entry.insert(key, value);
        }
    }

    entry.insert(
        "action_flow".to_string(),
        serde_json::to_value(action_flow).map_err(|e| JsonError::new(e.to_string()))?,
    );

    Ok(entry)
}

fn lip_sync_note(character_id: &str, duration_sec: u32) -> String {
    format!(
        "Voice-over must begin IMMEDIATELY at the start of the scene. Direct \
         {character_id} to deliver the line naturally within the scene's \
         {duration_sec}-second duration, framed within their portion of the screen. \
         Pacing should be adjusted to fit the line's length. Ensure clear, \
         synchronized mouth movements."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_clamps_to_window() {
        assert_eq!(scene_duration(5), 3); // raw 2
        assert_eq!(scene_duration(20), 8); // raw 8
        assert_eq!(scene_duration(100), 8); // raw 40
        assert_eq!(scene_duration(0), 3);
    }

    #[test]
    fn twelve_words_land_mid_window() {
        assert_eq!(scene_duration(12), 5); // raw round(4.8)
    }
}
