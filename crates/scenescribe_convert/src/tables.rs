//! Fixed content tables.
//!
//! The pose and action-flow tables are hand-authored variety, not generated
//! content: eight entries each, selected by scene index modulo the table
//! length so long scripts cycle through them round-robin.

use serde::{Deserialize, Serialize};

/// One on-camera pose for the speaking character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pose {
    /// Placement within the frame
    pub position: &'static str,
    /// Facing relative to the camera
    pub orientation: &'static str,
    /// Body posture
    pub pose: &'static str,
    /// Stance detail
    pub foot_placement: &'static str,
    /// Hand and gesture detail
    pub hand_detail: &'static str,
    /// Facial expression, also used as the dialogue delivery lead-in
    pub expression: &'static str,
}

/// A three-beat action flow for one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionFlow {
    /// Posture entering the scene
    pub pre_action: &'static str,
    /// Main on-screen action
    pub main_action: &'static str,
    /// Held posture closing the scene
    pub post_action: &'static str,
}

/// Foley and ambience template, emitted empty for every scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foley {
    /// Ambient sound beds
    pub ambience: Vec<String>,
    /// Spot effects
    pub fx: Vec<String>,
    /// Music cue
    pub music: String,
}

/// Fixed pose table, cycled by scene index.
pub const POSES: [Pose; 8] = [
    Pose {
        position: "center frame",
        orientation: "facing camera directly",
        pose: "standing upright",
        foot_placement: "feet shoulder-width on floor",
        hand_detail: "hands clasped loosely in front",
        expression: "firm, urgent",
    },
    Pose {
        position: "center frame",
        orientation: "angled slightly towards camera",
        pose: "leaning slightly forward, upper body engaged",
        foot_placement: "feet shoulder-width on floor",
        hand_detail: "one hand raised slightly, gesturing subtly",
        expression: "serious concern",
    },
    Pose {
        position: "center frame",
        orientation: "facing camera directly",
        pose: "standing with a deliberate posture",
        foot_placement: "feet shoulder-width on floor",
        hand_detail: "both hands gesturing, palms slightly open",
        expression: "grave, solemn",
    },
    Pose {
        position: "center frame, slightly forward",
        orientation: "facing camera directly, body slightly angled",
        pose: "stepping forward, posture resolute",
        foot_placement: "left foot forward, firmly on floor",
        hand_detail: "right fist gently clenched at his side",
        expression: "determined, resolute",
    },
    Pose {
        position: "center frame",
        orientation: "facing camera directly",
        pose: "standing, relaxed but engaged",
        foot_placement: "feet shoulder-width on floor",
        hand_detail: "open hand gesturing towards the viewer",
        expression: "reassuring, trustworthy",
    },
    Pose {
        position: "center frame",
        orientation: "facing camera",
        pose: "standing",
        foot_placement: "feet shoulder-width on floor",
        hand_detail: "right hand points index finger to temple",
        expression: "serious",
    },
    Pose {
        position: "center frame",
        orientation: "facing camera",
        pose: "standing",
        foot_placement: "feet shoulder-width on floor",
        hand_detail: "right hand holds up open palm",
        expression: "confident and reassuring",
    },
    Pose {
        position: "center frame",
        orientation: "facing camera",
        pose: "standing",
        foot_placement: "feet shoulder-width on floor",
        hand_detail: "hands relaxed at sides",
        expression: "triumphant and hopeful",
    },
];

/// Fixed action-flow table, cycled by scene index.
pub const ACTION_FLOWS: [ActionFlow; 8] = [
    ActionFlow {
        pre_action: "stands alert, maintaining professional demeanor",
        main_action: "looks directly at camera; adopts firm expression; clasps hands loosely in front",
        post_action: "holds position, conveying urgency and serious intent",
    },
    ActionFlow {
        pre_action: "maintains an attentive and poised stance",
        main_action: "shifts expression to serious concern; leans slightly forward; raises a hand slightly; gestures subtly",
        post_action: "holds a watchful, concerned gaze, implying confidentiality",
    },
    ActionFlow {
        pre_action: "holds a serious and attentive posture",
        main_action: "stands with grave expression; makes direct eye contact; gestures with both hands, palms slightly open",
        post_action: "holds open gesture, emphasizing the choice presented",
    },
    ActionFlow {
        pre_action: "stands with a determined and focused look",
        main_action: "steps forward slightly; shows determined and resolute expression; clenches his fist gently",
        post_action: "holds a strong, resolved posture, signaling conviction",
    },
    ActionFlow {
        pre_action: "maintains a resolute and trustworthy presence",
        main_action: "makes direct, reassuring eye contact; gestures with an open hand; invites the viewer to trust him",
        post_action: "holds inviting gaze and open posture, establishing rapport",
    },
    ActionFlow {
        pre_action: "CHAR_1 stands facing the camera, a thoughtful look on his face",
        main_action: "CHAR_1 raises his right hand; points his index finger to his temple; his brow furrows slightly; he maintains intense eye contact",
        post_action: "His serious expression deepens, conveying internal urgency",
    },
    ActionFlow {
        pre_action: "CHAR_1 stands ready to present, his posture open",
        main_action: "CHAR_1 raises his right hand to chest height; holds up an open palm towards the camera; his eyes soften; he gives a confident gaze",
        post_action: "A reassuring smile plays on his lips, revealing a proven plan",
    },
    ActionFlow {
        pre_action: "CHAR_1 holds a neutral and attentive posture",
        main_action: "CHAR_1's face brightens with a warm smile; his eyes shine with triumph and hope; he nods firmly, once; he maintains eye contact",
        post_action: "His hopeful expression lingers, confirming the positive outcome",
    },
];

/// Default voice direction used when the caller supplies none.
pub const DEFAULT_VOICE_INSTRUCTIONS: &str = "\
TONE: WARM, RESPECTFUL, AND REASSURING (AVOID JUVENILE OR HYPER-ENERGETIC TONES).

VOLUME: STABLE AND SLIGHTLY ABOVE AVERAGE VOLUME THROUGHOUT THE ENTIRE TRACK.

EMPHASIS: BOLDLY EMPHASIZE KEYWORDS, NUMBERS, AND CRITICAL INFORMATION.";
