//! Data model for the conversion pipeline.

use std::collections::BTreeMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use scenescribe_core::CredentialSet;

use crate::AspectRatio;
use crate::tables::Foley;

/// Fixed key of the single character profile in the setup record.
pub const CHARACTER_ID: &str = "CHAR_1";

/// Fixed key of the single background profile in the setup record.
pub const BACKGROUND_ID: &str = "BACKGROUND_1";

/// An open character or background profile.
///
/// Only `id` is required; every other backend-supplied attribute is kept
/// verbatim in `attributes` so that no descriptive detail is lost.
///
/// # Examples
///
/// ```
/// use scenescribe_convert::Profile;
///
/// let profile: Profile = serde_json::from_str(
///     r#"{"id":"CHAR_1","name":"Mara","hair":"short, silver"}"#,
/// ).unwrap();
/// assert_eq!(profile.id, "CHAR_1");
/// assert_eq!(profile.attributes["hair"], "short, silver");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile key, e.g. `CHAR_1` or `BACKGROUND_1`
    pub id: String,
    /// Free-form descriptive attributes, preserved as returned
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// The character/background/style definition shared across all scenes.
///
/// Matches the exported setup JSON artifact key-for-key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupRecord {
    /// Character profiles keyed by character id
    #[serde(default)]
    pub character_lock: BTreeMap<String, Profile>,
    /// Background profiles keyed by background id; may be empty
    #[serde(default)]
    pub background_lock: BTreeMap<String, Profile>,
    /// Visual style text, echoed verbatim from the request
    pub visual_style: String,
    /// Negative prompt text, echoed verbatim from the request
    pub negative_prompt: String,
}

impl SetupRecord {
    /// The character profile, if the backend produced one.
    pub fn character(&self) -> Option<&Profile> {
        self.character_lock.get(CHARACTER_ID)
    }

    /// The background profile, if the backend produced one.
    pub fn background(&self) -> Option<&Profile> {
        self.background_lock.get(BACKGROUND_ID)
    }
}

/// One translated, segmented dialogue chunk plus its illustration prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePlanUnit {
    /// The spoken dialogue for this scene (target 10-15 English words)
    pub scene_text: String,
    /// Non-literal description of the illustrative visual
    pub illustration_prompt: String,
}

/// A single spoken line within a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Speaker id (the character id)
    pub speaker: String,
    /// Spoken locale, fixed to `en-US`
    pub language: String,
    /// The line text
    pub line: String,
    /// Delivery direction (expression plus caller voice instructions)
    pub delivery: String,
}

/// A fully assembled, self-contained description of one video scene.
///
/// Constructed once during assembly, immutable thereafter, and serialized
/// as one line of newline-delimited JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// 1-based scene index as a string
    pub scene_id: String,
    /// Clamped spoken duration in seconds
    pub duration_sec: u32,
    /// Visual style shared by all scenes
    pub visual_style: String,
    /// Negative prompt shared by all scenes
    pub negative_prompt: String,
    /// Character profile merged with this scene's pose and action flow,
    /// keyed by character id
    pub character_lock: BTreeMap<String, serde_json::Map<String, serde_json::Value>>,
    /// Background profile keyed by background id; empty when the setup had
    /// no background
    pub background_lock: BTreeMap<String, Profile>,
    /// Composite prompt: layout sentence plus the illustration prompt
    pub prompt: String,
    /// Foley and ambience template
    pub foley_and_ambience: Foley,
    /// Spoken lines (a single entry per scene)
    pub dialogue: Vec<DialogueLine>,
    /// Lip-sync direction embedding the character id and duration
    pub lip_sync_director_note: String,
}

/// Aggregate statistics for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of assembled scenes
    pub scene_count: usize,
    /// Sum of clamped scene durations in seconds
    pub total_duration_sec: u32,
    /// Sum of scene-text word counts
    pub total_words: usize,
}

/// The two serialized artifacts plus statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// Pretty-printed setup JSON object
    pub setup_json: String,
    /// Newline-delimited scene records, one JSON object per line
    pub scenes_json: String,
    /// Aggregate statistics
    pub stats: ConversionStats,
}

/// Everything one conversion needs, passed by value.
///
/// # Examples
///
/// ```
/// use scenescribe_convert::{AspectRatio, ConversionInput};
/// use scenescribe_core::CredentialSet;
///
/// let input = ConversionInput::builder()
///     .character_description("A retired astronaut in a sunlit kitchen.")
///     .script_text("Xin chào các bạn.")
///     .aspect_ratio(AspectRatio::Wide)
///     .voice_instructions("TONE: warm and calm.")
///     .credentials(CredentialSet::parse("key-one key-two"))
///     .build()
///     .unwrap();
///
/// assert_eq!(input.aspect_ratio, AspectRatio::Wide);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ConversionInput {
    /// Free-form character and background description
    pub character_description: String,
    /// The narration script to translate and segment
    pub script_text: String,
    /// Output framing
    pub aspect_ratio: AspectRatio,
    /// Voice direction appended to every dialogue delivery
    #[builder(default)]
    pub voice_instructions: String,
    /// Backend API keys, tried in order
    pub credentials: CredentialSet,
}

impl ConversionInput {
    /// Start building a conversion input.
    pub fn builder() -> ConversionInputBuilder {
        ConversionInputBuilder::default()
    }
}
