//! Scenescribe CLI binary.
//!
//! Converts a narration script and a character description into the setup
//! and scenes JSON artifacts on disk.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_convert};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Convert {
            script,
            description,
            aspect_ratio,
            voice_instructions,
            out_dir,
        } => {
            run_convert(&script, &description, aspect_ratio, voice_instructions.as_deref(), &out_dir)
                .await?;
        }
    }

    Ok(())
}
