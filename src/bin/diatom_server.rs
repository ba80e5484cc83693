//! HTTP service classifying uploaded diatom images.
//!
//! Usage:
//! ```
//! diatom-server --config config/diatoms.json --model-path models/efficientnet_b0_diatoms.onnx --port 8000
//! ```

use clap::Parser;
use diatom_classifier::cli::{ClassifierArgs, ServerArgs, load_service_config};
use diatom_classifier::core::init_tracing;
use diatom_classifier::predictor::ClassifierContext;
use diatom_classifier::server;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "diatom-server")]
#[command(about = "Serves diatom image classification over HTTP")]
struct Args {
    #[command(flatten)]
    classifier: ClassifierArgs,

    #[command(flatten)]
    server: ServerArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let config = load_service_config(&args.classifier, &args.server)?;
    info!(
        model_path = %config.classifier.model_path.display(),
        address = %config.server.bind_address(),
        "starting diatom classifier"
    );

    let context = Arc::new(ClassifierContext::from_config(&config.classifier)?);
    server::serve(context, &config.server).await?;

    info!("server stopped");
    Ok(())
}
