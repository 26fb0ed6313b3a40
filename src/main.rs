use crate::app_config::AppConfig;
use tracing::info;

mod app_config;
mod demos;
mod domain;
mod hub;
mod patterns;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.log().level()).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    for demo in config.demos().enabled() {
        demos::run(*demo)?;
    }

    info!("🔥 {} finished all demos", env!("CARGO_PKG_NAME"));
    Ok(())
}
