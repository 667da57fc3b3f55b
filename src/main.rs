use anyhow::Result;
use clap::Parser;
use sentiment_server::pipelines::sentiment_analysis_pipeline::SentimentAnalysisPipelineBuilder;
use sentiment_server::pipelines::utils::DeviceSelectable;
use sentiment_server::server::{start_server, AppState};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting sentiment server");

    let state: AppState = AppState::new();
    state.initialize(|| SentimentAnalysisPipelineBuilder::simple().cpu().build());
    if let Some(reason) = state.failure() {
        tracing::warn!("serving without a model: {reason}");
    }

    start_server(state, &args.host, args.port).await
}
