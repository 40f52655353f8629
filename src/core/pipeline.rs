use crate::behavior::nav;
use crate::behavior::reveal::RevealObserver;
use crate::core::document::Document;
use crate::core::loader::{self, load_resource};
use crate::core::{ConfigProvider, DataSource, Pipeline, RenderResult, SiteData, Storage};
use crate::render;
use crate::utils::error::{Result, SiteError};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

const OUTPUT_FILENAME: &str = "index.html";
const ARCHIVE_FILENAME: &str = "site.zip";

pub struct SitePipeline<D: DataSource, S: Storage, C: ConfigProvider> {
    source: D,
    storage: S,
    config: C,
}

impl<D: DataSource, S: Storage, C: ConfigProvider> SitePipeline<D, S, C> {
    pub fn new(source: D, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<D: DataSource, S: Storage, C: ConfigProvider> Pipeline for SitePipeline<D, S, C> {
    async fn extract(&self) -> Result<SiteData> {
        tracing::debug!("Fetching resources from: {}", self.config.source_location());

        // 五個資源同時抓；個別失敗只影響自己的區塊
        let (profile, skills, experience, projects, education) = tokio::join!(
            load_resource(&self.source, loader::PROFILE_PATH),
            load_resource(&self.source, loader::SKILLS_PATH),
            load_resource(&self.source, loader::EXPERIENCE_PATH),
            load_resource(&self.source, loader::PROJECTS_PATH),
            load_resource(&self.source, loader::EDUCATION_PATH),
        );

        Ok(SiteData {
            profile,
            skills,
            experience,
            education,
            projects,
        })
    }

    async fn transform(&self, data: SiteData) -> Result<RenderResult> {
        let result = render::render_all(&data);

        for section in &result.skipped {
            tracing::warn!("Section '{}' skipped: resource unavailable", section);
        }
        tracing::debug!(
            "Produced {} updates for {} sections",
            result.updates.len(),
            result.rendered.len()
        );

        Ok(result)
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        let template_path = self.config.template_path();
        let template = tokio::fs::read_to_string(template_path).await.map_err(|e| {
            SiteError::TemplateError {
                message: format!("cannot read template '{}': {}", template_path, e),
            }
        })?;
        let mut document = Document::parse(&template)?;

        // 模板裡原有的動畫元素先觀察一輪
        let mut observer = RevealObserver::new();
        for key in document.reveal_keys() {
            observer.observe(key);
        }

        let mut applied = 0usize;
        for update in &result.updates {
            if document.apply(update) {
                applied += 1;
            } else if let Some(target) = update.target() {
                tracing::debug!("Insertion point '{}' not present; skipping", target);
            } else {
                tracing::debug!("Template has no <title> element; skipping title update");
            }
        }
        tracing::debug!("Applied {}/{} updates", applied, result.updates.len());

        // 區塊注入後的第二輪掃描，補觀察新產生的元素
        let swept = observer.sweep(document.reveal_keys());
        tracing::debug!(
            "Reveal observer tracking {} elements ({} added after render)",
            observer.observed_count(),
            swept
        );

        for target in nav::dangling_nav_targets(&document.nav_targets(), &document.ids()) {
            tracing::warn!("Nav link '#{}' has no matching section", target);
        }

        let html = document.into_html();
        tracing::debug!("Writing page ({} bytes) to storage", html.len());
        self.storage
            .write_file(OUTPUT_FILENAME, html.as_bytes())
            .await?;

        if self.config.archive() {
            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                zip.start_file::<_, ()>(OUTPUT_FILENAME, FileOptions::default())?;
                zip.write_all(html.as_bytes())?;
                let cursor = zip.finish()?;
                cursor.into_inner()
            };
            self.storage.write_file(ARCHIVE_FILENAME, &zip_data).await?;
            tracing::info!(
                "📦 Site archived to {}/{}",
                self.config.output_path(),
                ARCHIVE_FILENAME
            );
        }

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILENAME))
    }
}
