//! Output framing.

use serde::{Deserialize, Serialize};

use scenescribe_error::{ConfigError, ScenescribeError};

/// Supported output framings.
///
/// The wire form is the conventional ratio string (`16:9` / `9:16`), used in
/// prompts, serialized artifacts, and CLI flags alike.
///
/// # Examples
///
/// ```
/// use scenescribe_convert::AspectRatio;
///
/// let wide: AspectRatio = "16:9".parse().unwrap();
/// assert_eq!(wide, AspectRatio::Wide);
/// assert_eq!(format!("{}", AspectRatio::Tall), "9:16");
/// assert!("4:3".parse::<AspectRatio>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum AspectRatio {
    /// Landscape framing (16:9)
    #[display("16:9")]
    #[serde(rename = "16:9")]
    Wide,
    /// Portrait framing (9:16)
    #[display("9:16")]
    #[serde(rename = "9:16")]
    Tall,
}

impl std::str::FromStr for AspectRatio {
    type Err = ScenescribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(AspectRatio::Wide),
            "9:16" => Ok(AspectRatio::Tall),
            other => Err(ConfigError::new(format!(
                "Unsupported aspect ratio '{other}' (expected 16:9 or 9:16)"
            ))
            .into()),
        }
    }
}
