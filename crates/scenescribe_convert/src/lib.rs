//! Script-to-scene conversion pipeline.
//!
//! Turns a narration script plus a character/background description into
//! the two artifacts a text-to-video pipeline consumes: a setup JSON object
//! (character, background, style) and a newline-delimited list of
//! per-scene records.
//!
//! The pipeline has three stages:
//! 1. **Setup synthesis** ([`synthesize_setup`]) — one backend call that
//!    extracts a character and background profile from free-form text.
//! 2. **Scene planning** ([`plan_scenes`]) — one backend call that
//!    translates and segments the script into scene units.
//! 3. **Assembly** ([`assemble`]) — a pure merge of both results with the
//!    fixed pose/action-flow tables.
//!
//! [`Converter`] runs the two backend stages concurrently and joins them
//! before assembly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aspect;
mod assembler;
mod convert;
mod extract;
mod planner;
mod records;
mod setup;
mod style;
mod tables;

pub use aspect::AspectRatio;
pub use assembler::assemble;
pub use convert::Converter;
pub use extract::extract_json;
pub use planner::plan_scenes;
pub use records::{
    BACKGROUND_ID, CHARACTER_ID, ConversionInput, ConversionInputBuilder, ConversionResult,
    ConversionStats, DialogueLine, Profile, ScenePlanUnit, SceneRecord, SetupRecord,
};
pub use setup::synthesize_setup;
pub use style::{layout_sentence, visual_style_and_negative_prompt};
pub use tables::{
    ACTION_FLOWS, ActionFlow, DEFAULT_VOICE_INSTRUCTIONS, Foley, POSES, Pose,
};
