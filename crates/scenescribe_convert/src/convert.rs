//! The conversion entry point.

use scenescribe_error::{JsonError, ScenescribeResult};
use scenescribe_interface::ScenescribeDriver;
use scenescribe_models::RotatingExecutor;

use crate::assembler::assemble;
use crate::planner::plan_scenes;
use crate::records::{ConversionInput, ConversionResult};
use crate::setup::synthesize_setup;

/// Runs complete conversions against one backend driver.
///
/// A converter is stateless between calls: each [`convert`](Self::convert)
/// fans out into exactly two concurrent backend calls (setup synthesis and
/// scene planning), joins them, and assembles the result. Independent
/// conversions can share one converter.
///
/// # Example
///
/// ```no_run
/// use scenescribe_convert::{AspectRatio, ConversionInput, Converter};
/// use scenescribe_core::CredentialSet;
/// use scenescribe_models::GeminiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let converter = Converter::new(GeminiClient::new()?);
///
/// let input = ConversionInput::builder()
///     .character_description("A retired astronaut in a sunlit kitchen.")
///     .script_text("Xin chào các bạn.")
///     .aspect_ratio(AspectRatio::Wide)
///     .credentials(CredentialSet::parse(&std::env::var("GEMINI_API_KEYS")?))
///     .build()?;
///
/// let result = converter.convert(&input).await?;
/// println!("{} scenes", result.stats.scene_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter<D> {
    executor: RotatingExecutor<D>,
}

impl<D: ScenescribeDriver> Converter<D> {
    /// Create a converter over the given driver.
    pub fn new(driver: D) -> Self {
        Self {
            executor: RotatingExecutor::new(driver),
        }
    }

    /// Access the underlying rotation executor.
    pub fn executor(&self) -> &RotatingExecutor<D> {
        &self.executor
    }

    /// Run one full conversion.
    ///
    /// All-or-nothing: either both generation stages succeed and assembly
    /// completes, or the whole operation fails with the first stage error.
    #[tracing::instrument(skip_all, fields(aspect = %input.aspect_ratio))]
    pub async fn convert(&self, input: &ConversionInput) -> ScenescribeResult<ConversionResult> {
        let (setup, plan) = tokio::try_join!(
            synthesize_setup(
                &self.executor,
                &input.character_description,
                input.aspect_ratio,
                &input.credentials,
            ),
            plan_scenes(&self.executor, &input.script_text, &input.credentials),
        )?;

        let (scenes, stats) = assemble(&setup, &plan, input.aspect_ratio, &input.voice_instructions)?;

        let setup_json = serde_json::to_string_pretty(&setup)
            .map_err(|e| JsonError::new(e.to_string()))?;

        let scenes_json = scenes
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| JsonError::new(e.to_string()))?
            .join("\n");

        tracing::info!(
            scenes = stats.scene_count,
            duration_sec = stats.total_duration_sec,
            words = stats.total_words,
            "conversion complete"
        );

        Ok(ConversionResult {
            setup_json,
            scenes_json,
            stats,
        })
    }
}
