use std::sync::Arc;

use mindmate::api::{self, ProxyState, proxy_routes};
use mindmate::config::{ProxyConfig, ServerConfig};
use mindmate::error::Result;
use mindmate::llm::{TherapistProxy, create_provider};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    mindmate::init_logging();

    run().await?;
    Ok(())
}

async fn run() -> Result<()> {
    let server_config = ServerConfig::from_env()?;
    let proxy_config = ProxyConfig::from_env();

    eprintln!("🌱 MindMate proxy v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", proxy_config.model);
    eprintln!("   Upstream: {}", proxy_config.base_url);
    eprintln!("   Chat API: http://{}/chat\n", server_config.bind_addr());

    let llm = create_provider(&proxy_config)?;
    let proxy = TherapistProxy::new(llm).with_system_prompt(proxy_config.system_prompt);

    let app = proxy_routes(ProxyState {
        proxy: Arc::new(proxy),
    });
    api::serve(app, &server_config, "mindmate-proxy").await
}
