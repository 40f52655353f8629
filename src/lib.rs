pub mod behavior;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::{HttpSource, LocalSource, LocalStorage};
pub use config::toml_config::TomlConfig;

pub use crate::core::{engine::SiteEngine, pipeline::SitePipeline};
pub use utils::error::{Result, SiteError};
