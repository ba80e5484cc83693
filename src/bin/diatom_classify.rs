//! Classifies image files offline, printing one JSON result per line.
//!
//! Usage:
//! ```
//! diatom-classify --config config/diatoms.json <image_paths>...
//! ```

use clap::Parser;
use diatom_classifier::cli::{ClassifierArgs, ServerArgs, load_service_config};
use diatom_classifier::core::init_tracing;
use diatom_classifier::predictor::ClassifierContext;
use diatom_classifier::utils::load_image;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "diatom-classify")]
#[command(about = "Classifies diatom images and prints one JSON result per image")]
struct Args {
    #[command(flatten)]
    classifier: ClassifierArgs,

    /// Image file paths to process
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let config = load_service_config(&args.classifier, &ServerArgs::default())?;
    let context = ClassifierContext::from_config(&config.classifier)?;
    if !context.model_loaded() {
        warn!("trained weights not loaded; predictions come from the untrained fallback");
    }

    let mut failures = 0usize;
    for path in &args.images {
        let result = load_image(path).and_then(|img| context.classify_image(&img));
        match result {
            Ok(prediction) => {
                let mut line = serde_json::to_value(&prediction)?;
                line["image"] = serde_json::Value::String(path.display().to_string());
                println!("{line}");
            }
            Err(e) => {
                failures += 1;
                error!(image = %path.display(), error = %e, "classification failed");
            }
        }
    }

    info!(
        total = args.images.len(),
        failed = failures,
        "classification finished"
    );
    if failures == args.images.len() {
        return Err("no image could be classified".into());
    }
    Ok(())
}
