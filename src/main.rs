use std::sync::Arc;

use mindmate::api::{self, ChatState, chat_routes};
use mindmate::config::ServerConfig;
use mindmate::error::Result;
use mindmate::responder::{Responder, RuleSet};
use mindmate::safety::CrisisDetector;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    mindmate::init_logging();

    run().await?;
    Ok(())
}

async fn run() -> Result<()> {
    let server_config = ServerConfig::from_env()?;

    let detector = CrisisDetector::new();
    let rules = RuleSet::default_rules();
    tracing::info!(
        crisis_patterns = detector.pattern_count(),
        categories = rules.rules().len(),
        "Responder ready"
    );
    let responder = Arc::new(Responder::new(detector, rules));

    eprintln!("🌱 MindMate v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Page: http://{}/", server_config.bind_addr());
    eprintln!("   Chat API: http://{}/chat\n", server_config.bind_addr());

    let app = chat_routes(ChatState { responder });
    api::serve(app, &server_config, "mindmate").await
}
