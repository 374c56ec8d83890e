use pirateconfig::get_config;
use pirateradio::{SkillConfigExt, skill_builder};
use pirateserver::{LoggingOptions, ServerBuilder, create_log_router, init_logging, skill_api};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config();
    let log_handle = init_logging(LoggingOptions::from_config(&config))?;
    info!("📁 Configuration loaded from {}", config.file_path());

    // ========== Skill ==========

    let registry = Arc::new(config.load_station_registry()?);
    info!("📻 {} station(s) available", registry.len());
    for name in registry.names() {
        info!("  - {}", name);
    }

    let mut builder = skill_builder(registry.clone());
    match config.get_skill_id()? {
        Some(skill_id) => {
            info!("🔒 Accepting requests for skill {}", skill_id);
            builder = builder.with_skill_id(skill_id);
        }
        None => info!("🔓 No skill id configured, accepting every request"),
    }
    let skill = Arc::new(builder.build());

    // ========== Serveur HTTP ==========

    let mut server = ServerBuilder::new_configured().build();
    server
        .add_router("/", skill_api::create_router(skill, registry))
        .await;
    server.add_router("/", create_log_router(log_handle)).await;

    server.start().await?;
    info!("✅ Pirate Radio ready");
    server.wait().await;

    Ok(())
}
