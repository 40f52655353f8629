pub mod document;
pub mod engine;
pub mod loader;
pub mod pipeline;

pub use crate::domain::model::{RenderResult, SectionUpdate, SiteData};
pub use crate::domain::ports::{ConfigProvider, DataSource, Pipeline, Storage};
pub use crate::utils::error::Result;
