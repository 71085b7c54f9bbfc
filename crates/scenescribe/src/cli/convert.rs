//! The `convert` command handler.

use std::path::Path;

use tracing::info;

use scenescribe_convert::{
    AspectRatio, ConversionInput, Converter, DEFAULT_VOICE_INSTRUCTIONS,
};
use scenescribe_core::CredentialSet;
use scenescribe_error::ConfigError;
use scenescribe_models::GeminiClient;

/// Run one conversion and write `setup.json` and `scenes.jsonl` to the
/// output directory.
pub async fn run_convert(
    script: &Path,
    description: &Path,
    aspect_ratio: AspectRatio,
    voice_instructions: Option<&Path>,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present; environment takes precedence
    dotenvy::dotenv().ok();

    let credentials = load_credentials()?;
    let script_text = std::fs::read_to_string(script)?;
    let description_text = std::fs::read_to_string(description)?;
    let voice_text = match voice_instructions {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_VOICE_INSTRUCTIONS.to_string(),
    };

    let input = ConversionInput::builder()
        .character_description(description_text)
        .script_text(script_text)
        .aspect_ratio(aspect_ratio)
        .voice_instructions(voice_text)
        .credentials(credentials)
        .build()?;

    let converter = Converter::new(GeminiClient::new()?);
    let result = converter.convert(&input).await?;

    std::fs::create_dir_all(out_dir)?;
    let setup_path = out_dir.join("setup.json");
    let scenes_path = out_dir.join("scenes.jsonl");
    std::fs::write(&setup_path, format!("{}\n", result.setup_json))?;
    std::fs::write(&scenes_path, format!("{}\n", result.scenes_json))?;

    info!(
        scenes = result.stats.scene_count,
        duration_sec = result.stats.total_duration_sec,
        words = result.stats.total_words,
        setup = %setup_path.display(),
        scenes_file = %scenes_path.display(),
        "wrote conversion artifacts"
    );

    Ok(())
}

/// Read the key list from `GEMINI_API_KEYS`, falling back to the
/// single-key `GEMINI_API_KEY`.
fn load_credentials() -> Result<CredentialSet, ConfigError> {
    let raw = std::env::var("GEMINI_API_KEYS")
        .or_else(|_| std::env::var("GEMINI_API_KEY"))
        .map_err(|_| {
            ConfigError::new("Set GEMINI_API_KEYS (whitespace-separated) or GEMINI_API_KEY")
        })?;

    let credentials = CredentialSet::parse(&raw);
    if credentials.is_empty() {
        return Err(ConfigError::new(
            "GEMINI_API_KEYS is set but contains no usable keys",
        ));
    }
    Ok(credentials)
}
