use crate::core::Pipeline;
use crate::domain::model::SiteData;
use crate::utils::error::Result;

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
    monitoring: bool,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitoring: false,
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitoring: bool) -> Self {
        Self {
            pipeline,
            monitoring,
        }
    }

    pub async fn run(&self) -> Result<String> {
        #[cfg(feature = "cli")]
        let monitor = crate::utils::monitor::SystemMonitor::new(self.monitoring);
        #[cfg(not(feature = "cli"))]
        let _ = self.monitoring;

        println!("Starting site render...");

        // Fetch
        println!("Fetching data...");
        let data = self.pipeline.extract().await?;
        println!("Fetched {} of 5 resources", count_present(&data));
        #[cfg(feature = "cli")]
        monitor.log_phase("extract");

        // Render
        println!("Rendering sections...");
        let rendered = self.pipeline.transform(data).await?;
        println!(
            "Rendered {} sections ({} skipped)",
            rendered.rendered.len(),
            rendered.skipped.len()
        );
        #[cfg(feature = "cli")]
        monitor.log_phase("transform");

        // Write
        println!("Writing page...");
        let output_path = self.pipeline.load(rendered).await?;
        println!("Output saved to: {}", output_path);
        #[cfg(feature = "cli")]
        monitor.log_phase("load");

        tracing::info!("Render finished at {}", chrono::Utc::now().to_rfc3339());

        Ok(output_path)
    }
}

fn count_present(data: &SiteData) -> usize {
    [
        data.profile.is_some(),
        data.skills.is_some(),
        data.experience.is_some(),
        data.education.is_some(),
        data.projects.is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count()
}
