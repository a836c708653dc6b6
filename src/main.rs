use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

use vent::args::Args;
use vent::llm::OpenAiChat;
use vent::{Server, Synthesizer, logger, server, shutdown::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init()?;
    let args = Args::parse();

    let config = args.generator_config();
    if config.api_key.is_none() {
        tracing::warn!("no API key configured; every response will use fallback templates");
    }
    tracing::info!(model = %config.model, base_url = %config.base_url, "remote generator configured");

    let llm = Arc::new(OpenAiChat::new(config));
    let synth = Arc::new(Synthesizer::new(llm).avatar_style(args.avatar_style));
    let app = Arc::new(Server::new(synth, args.reveal_delay()));

    let addr: SocketAddr = args.addr().parse()?;
    server::serve(app, addr, shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}
