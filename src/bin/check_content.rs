//! Content check binary - validates every page in every locale without
//! writing any output
//!
//! Usage:
//!   cargo run --bin check-content
//!
//! Reads the same environment variables as the site build.

use anyhow::Result;
use site_content::build::{BuildMode, SiteBuilder};
use site_content::config::Config;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_content=warn".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let builder = SiteBuilder::new(&config);
    let manifest = builder.run(BuildMode::Check).await?;

    println!("\n========================================");
    println!("  CONTENT CHECK: {}", config.content_dir.display());
    println!("========================================");
    for outcome in &manifest.pages {
        let status = match (&outcome.error, outcome.is_fallback) {
            (Some(_), _) => "FAIL",
            (None, true) => "WARN",
            (None, false) => "ok",
        };
        let served = outcome.used_locale.as_deref().unwrap_or("placeholder");
        println!(
            "  {:<4} {:<28} {:<8} -> {}",
            status, outcome.page, outcome.requested_locale, served
        );
        if let Some(error) = &outcome.error {
            for line in error.lines() {
                println!("         {}", line);
            }
        }
    }
    println!("========================================");

    let failed = manifest.failures().count();
    info!("{} pages checked, {} failed", manifest.pages.len(), failed);
    println!(
        "{} checked, {} with fallback, {} failed",
        manifest.pages.len(),
        manifest.pages.iter().filter(|p| p.is_fallback).count(),
        failed
    );

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
