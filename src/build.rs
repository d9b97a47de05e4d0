//! Site builder.
//!
//! Every (page, locale) pair is built independently on tokio's blocking
//! pool. The content loader's memo cache and the metrics are the only state
//! the builds share.

use crate::config::Config;
use crate::content::ContentLoader;
use crate::error::ContentError;
use crate::i18n::LocaleRegistry;
use crate::metrics::{BuildMetrics, MetricsReport};
use crate::pages::{LoadedPage, Page, PageLoader};
use crate::render::render_page;
use crate::sections::SectionNormalizer;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Render and write HTML plus the manifest
    Write,
    /// Load, validate and render, but write nothing
    Check,
}

/// Result of building one page in one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageOutcome {
    pub page: String,
    pub requested_locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_locale: Option<String>,
    pub is_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    fn failed(page: &Page, locale: &str, error: String) -> Self {
        Self {
            page: page.name(),
            requested_locale: locale.to_string(),
            used_locale: None,
            is_fallback: false,
            output: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildManifest {
    pub generated_at: DateTime<Utc>,
    pub default_locale: String,
    pub locales: Vec<String>,
    pub pages: Vec<PageOutcome>,
    pub metrics: MetricsReport,
}

impl BuildManifest {
    pub fn failures(&self) -> impl Iterator<Item = &PageOutcome> {
        self.pages.iter().filter(|p| !p.is_ok())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Shared, cheaply clonable state for one build.
#[derive(Debug, Clone)]
struct BuildContext {
    content: Arc<ContentLoader>,
    registry: Arc<LocaleRegistry>,
    normalizer: Arc<SectionNormalizer>,
    metrics: Arc<BuildMetrics>,
    output_dir: PathBuf,
}

impl BuildContext {
    fn load(&self, page: &Page, locale: &str) -> Result<LoadedPage, ContentError> {
        PageLoader::new(&self.content, &self.registry)
            .with_metrics(self.metrics.clone())
            .load(page, Some(locale))
    }

    /// Build one page synchronously.
    fn build(&self, page: &Page, locale: &str, mode: BuildMode) -> PageOutcome {
        let loaded = match self.load(page, locale) {
            Ok(loaded) => loaded,
            Err(e) => {
                error!("{} [{}] failed: {}", page, locale, e);
                return PageOutcome::failed(page, locale, e.to_string());
            }
        };

        let html = render_page(&loaded, &self.normalizer);
        let output = match mode {
            BuildMode::Check => None,
            BuildMode::Write => {
                let relative = page.output_path(locale);
                if let Err(e) = write_file(&self.output_dir.join(&relative), html.as_str()) {
                    error!("{} [{}] could not be written: {:#}", page, locale, e);
                    return PageOutcome::failed(page, locale, format!("{:#}", e));
                }
                Some(relative)
            }
        };

        PageOutcome {
            page: loaded.page,
            requested_locale: loaded.requested_locale,
            used_locale: loaded.used_locale,
            is_fallback: loaded.is_fallback,
            output,
            error: None,
        }
    }
}

pub struct SiteBuilder {
    ctx: BuildContext,
    content_dir: PathBuf,
    service_slugs: Option<Vec<String>>,
    timeout: Duration,
}

impl SiteBuilder {
    pub fn new(config: &Config) -> Self {
        let metrics = Arc::new(BuildMetrics::new());
        let mut content = ContentLoader::new(&config.content_dir).with_metrics(metrics.clone());
        if config.cache_content {
            content = content.cached();
        }

        Self {
            ctx: BuildContext {
                content: Arc::new(content),
                registry: Arc::new(config.locales.clone()),
                normalizer: Arc::new(SectionNormalizer::new(&config.promote_keywords)),
                metrics,
                output_dir: config.output_dir.clone(),
            },
            content_dir: config.content_dir.clone(),
            service_slugs: config.service_slugs.clone(),
            timeout: config.build_timeout,
        }
    }

    pub fn metrics(&self) -> &BuildMetrics {
        &self.ctx.metrics
    }

    /// Every page to build: the fixed pages, then one per service.
    pub fn pages(&self) -> Result<Vec<Page>> {
        let slugs = match &self.service_slugs {
            Some(slugs) => slugs.clone(),
            None => discover_service_slugs(&self.content_dir, self.ctx.registry.default_locale())?,
        };

        let mut pages = Page::FIXED.to_vec();
        pages.extend(slugs.into_iter().map(Page::service));
        Ok(pages)
    }

    /// Build every page for every supported locale.
    pub async fn run(&self, mode: BuildMode) -> Result<BuildManifest> {
        let pages = self.pages()?;
        let locales: Vec<String> = self
            .ctx
            .registry
            .codes()
            .into_iter()
            .map(str::to_string)
            .collect();

        info!(
            "Building {} pages for {} locales ({:?})",
            pages.len(),
            locales.len(),
            mode
        );

        let builds = pages.iter().flat_map(|page| {
            locales
                .iter()
                .map(move |locale| self.spawn(page.clone(), locale.clone(), mode))
        });
        let outcomes = join_all(builds).await;

        for outcome in &outcomes {
            if outcome.is_ok() {
                self.ctx.metrics.record_page_built();
            } else {
                self.ctx.metrics.record_page_failed();
            }
        }

        let manifest = BuildManifest {
            generated_at: Utc::now(),
            default_locale: self.ctx.registry.default_locale().to_string(),
            locales,
            pages: outcomes,
            metrics: self.ctx.metrics.report(),
        };

        if mode == BuildMode::Write {
            let path = self.ctx.output_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)
                .context("Failed to serialize build manifest")?;
            write_file(&path, &json)?;
            info!("Wrote manifest to {}", path.display());
        }

        Ok(manifest)
    }

    async fn spawn(&self, page: Page, locale: String, mode: BuildMode) -> PageOutcome {
        let ctx = self.ctx.clone();
        let (task_page, task_locale) = (page.clone(), locale.clone());
        let handle =
            tokio::task::spawn_blocking(move || ctx.build(&task_page, &task_locale, mode));

        match tokio::time::timeout(self.timeout, handle).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                error!("{} [{}] build task failed: {}", page, locale, e);
                PageOutcome::failed(&page, &locale, format!("Task join error: {}", e))
            }
            Err(_) => {
                warn!(
                    "{} [{}] timed out after {}s",
                    page,
                    locale,
                    self.timeout.as_secs()
                );
                PageOutcome::failed(
                    &page,
                    &locale,
                    format!("Timed out after {}s", self.timeout.as_secs()),
                )
            }
        }
    }
}

/// Service slugs with a default-locale document under `services/`,
/// sorted. A missing directory means no services.
pub fn discover_service_slugs(content_dir: &Path, default_locale: &str) -> Result<Vec<String>> {
    let dir = content_dir.join("services");
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", dir.display())),
    };

    let suffix = format!(".{}.json", default_locale);
    let mut slugs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        let name = entry.file_name();
        let Some(slug) = name.to_str().and_then(|n| n.strip_suffix(suffix.as_str())) else {
            continue;
        };
        if !slug.is_empty() {
            slugs.push(slug.to_string());
        }
    }

    slugs.sort();
    Ok(slugs)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_service_slugs() {
        let dir = TempDir::new().unwrap();
        let services = dir.path().join("services");
        fs::create_dir_all(&services).unwrap();
        for name in [
            "consulting.en-GB.json",
            "audit.en-GB.json",
            "audit.zh-TW.json",
            "en-GB.json",
            "notes.txt",
        ] {
            fs::write(services.join(name), "{}").unwrap();
        }

        let slugs = discover_service_slugs(dir.path(), "en-GB").unwrap();
        assert_eq!(slugs, vec!["audit", "consulting"]);
    }

    #[test]
    fn test_discover_without_services_dir() {
        let dir = TempDir::new().unwrap();
        assert!(discover_service_slugs(dir.path(), "en-GB").unwrap().is_empty());
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zh-TW/services/audit.html");
        write_file(&path, "<p>x</p>").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_manifest_failures() {
        let manifest = BuildManifest {
            generated_at: Utc::now(),
            default_locale: "en-GB".to_string(),
            locales: vec!["en-GB".to_string()],
            pages: vec![
                PageOutcome::failed(&Page::About, "en-GB", "missing".to_string()),
                PageOutcome {
                    page: "home".to_string(),
                    requested_locale: "en-GB".to_string(),
                    used_locale: Some("en-GB".to_string()),
                    is_fallback: false,
                    output: Some(PathBuf::from("en-GB/home.html")),
                    error: None,
                },
            ],
            metrics: BuildMetrics::new().report(),
        };
        assert!(manifest.has_failures());
        assert_eq!(manifest.failures().count(), 1);

        let json = serde_json::to_value(&manifest).unwrap();
        assert!(json["pages"][0].get("output").is_none());
        assert_eq!(json["pages"][1]["used_locale"], "en-GB");
    }
}
