pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "foliogen")]
#[command(about = "Renders a static portfolio site from JSON data files")]
pub struct CliConfig {
    /// 資料來源根目錄或 http(s) base URL（其下需有 data/*.json）
    #[arg(long, default_value = ".")]
    pub data_source: String,

    #[arg(long, default_value = "./assets/template.html")]
    pub template: String,

    #[arg(long, default_value = "./site")]
    pub output_path: String,

    /// 同時把輸出打包成 site.zip
    #[arg(long)]
    pub archive: bool,

    /// 改用 TOML 設定檔（會覆蓋其他旗標）
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_location(&self) -> &str {
        &self.data_source
    }

    fn template_path(&self) -> &str {
        &self.template
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn archive(&self) -> bool {
        self.archive
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_source_location("data_source", &self.data_source)?;
        validation::validate_path("template", &self.template)?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
