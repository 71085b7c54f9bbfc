//! Style and layout text templates.
//!
//! These strings are authored here, not invented by the backend: the setup
//! request instructs the model to echo the style text back verbatim, and the
//! layout sentence is prefixed onto every scene prompt during assembly.

use crate::AspectRatio;

/// Visual style and negative prompt for the given framing.
///
/// # Examples
///
/// ```
/// use scenescribe_convert::{AspectRatio, visual_style_and_negative_prompt};
///
/// let (style, negative) = visual_style_and_negative_prompt(AspectRatio::Wide);
/// assert!(style.contains("(16:9)"));
/// assert!(negative.contains("letterbox"));
/// ```
pub fn visual_style_and_negative_prompt(aspect: AspectRatio) -> (String, String) {
    let visual_style = format!(
        "Live-action cinematic style, filmed with real actors and realistic environments. \
         Natural human appearance with authentic skin tones, hair, and clothing. \
         Shot with professional cameras, cinematic depth of field, natural lighting. \
         High resolution, ultra sharp detail, cinematic color grading. \
         Aspect ratio ({aspect}) EDGE-TO-EDGE; CENTER-CROP to fit; DO NOT pad. \
         Deliver full-frame only."
    );
    let negative_prompt = "black bars, letterbox, pillarbox, borders, mattes, padding, \
         blur background, watermark, captions, subtitles, CGI, animated, cartoon, \
         stylized, 3D render"
        .to_string();
    (visual_style, negative_prompt)
}

/// Layout sentence prefixed onto every scene's illustration prompt.
///
/// Wide framing places the speaker on the left third with the illustration
/// on the right two-thirds; tall framing stacks them top third over bottom
/// two-thirds.
pub fn layout_sentence(aspect: AspectRatio) -> &'static str {
    match aspect {
        AspectRatio::Wide => {
            "The speaker, CHAR_1, is framed on the left third of the screen, speaking to \
             the camera against BACKGROUND_1. The right two-thirds of the screen displays \
             an illustrative visual:"
        }
        AspectRatio::Tall => {
            "The speaker, CHAR_1, is framed on the top third of the screen, speaking to \
             the camera against BACKGROUND_1. The bottom two-thirds of the screen displays \
             an illustrative visual:"
        }
    }
}
