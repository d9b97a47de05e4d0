//! Static site build.
//!
//! Usage:
//!   cargo run                      # Build every page into OUTPUT_DIR
//!
//! Optional environment variables:
//! - CONTENT_DIR (defaults to content)
//! - OUTPUT_DIR (defaults to dist)
//! - DEFAULT_LOCALE (defaults to en-GB)
//! - SUPPORTED_LOCALES (defaults to en-GB,zh-TW)
//! - SECTION_PROMOTE_KEYWORDS (defaults to the built-in bilingual list)
//! - SERVICE_SLUGS (defaults to every services/<slug>.<DEFAULT_LOCALE>.json)
//! - BUILD_TIMEOUT_SECS (defaults to 30)
//! - CACHE_CONTENT (defaults to true)

use anyhow::{bail, Result};
use site_content::build::{BuildMode, SiteBuilder};
use site_content::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_content=info".parse()?),
        )
        .init();

    info!("Starting site build");

    let config = Config::from_env()?;
    info!(
        "Content: {}, output: {}, locales: {:?}",
        config.content_dir.display(),
        config.output_dir.display(),
        config.locales.codes()
    );

    let builder = SiteBuilder::new(&config);
    let manifest = builder.run(BuildMode::Write).await?;

    let report = &manifest.metrics;
    info!(
        "Built {} pages ({} failed, {} with fallback notice, {:.1}% fallback rate)",
        report.pages_built,
        report.pages_failed,
        report.locale_fallbacks + report.validation_fallbacks,
        report.fallback_rate
    );

    if manifest.has_failures() {
        for failure in manifest.failures() {
            error!(
                "{} [{}]: {}",
                failure.page,
                failure.requested_locale,
                failure.error.as_deref().unwrap_or("unknown error")
            );
        }
        bail!("{} page build(s) failed", report.pages_failed);
    }

    info!("Site build complete");
    Ok(())
}
