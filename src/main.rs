use comic_viewer::build_rocket;
use comic_viewer::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(api_base_url = %config.api_base_url, "starting comic viewer");

    if let Err(e) = build_rocket(config)?.launch().await {
        // Formatting the error marks it handled, so rocket does not abort on drop.
        let message = e.to_string();
        tracing::error!(error = %message, "server stopped with an error");
        anyhow::bail!(message);
    }

    Ok(())
}
