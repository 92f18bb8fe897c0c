use std::sync::Arc;

use clap::Parser;
use cloudblog::ai::OpenAiClient;
use cloudblog::config::setup_logging;
use cloudblog::gateway::BlogGateway;
use tracing::{error, warn};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = cloudblog::cli::CliOptions::parse();

    if let Err(err) = setup_logging(cli.debug) {
        eprintln!("Logging setup error: {}", err);
        return;
    }

    if cli.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, generation requests will fail until it is");
    }

    let client = Arc::new(
        OpenAiClient::new(cli.openai_api_key)
            .with_base_url(cli.openai_base_url.as_str())
            .with_text_model(&cli.text_model)
            .with_image_model(&cli.image_model),
    );
    let gateway = BlogGateway::new(client.clone(), client);

    if let Err(err) =
        cloudblog::web::setup_server(&cli.listen_address, cli.port, gateway).await
    {
        error!("Application error: {}", err);
    }
}
