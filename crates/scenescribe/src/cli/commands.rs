//! CLI command definitions.

use clap::{Parser, Subcommand};
use scenescribe_convert::AspectRatio;
use std::path::PathBuf;

/// Scenescribe - convert narration scripts into text-to-video JSON artifacts
#[derive(Parser, Debug)]
#[command(name = "scenescribe")]
#[command(about = "Convert narration scripts into setup and scene JSON for text-to-video pipelines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a script and description into setup.json and scenes.jsonl
    Convert {
        /// Path to the narration script (Vietnamese text)
        #[arg(long)]
        script: PathBuf,

        /// Path to the character/background description
        #[arg(long)]
        description: PathBuf,

        /// Output framing
        #[arg(long, default_value = "16:9")]
        aspect_ratio: AspectRatio,

        /// Path to a voice-instructions file (built-in defaults when omitted)
        #[arg(long)]
        voice_instructions: Option<PathBuf>,

        /// Directory the artifacts are written to
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
}
