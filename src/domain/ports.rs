use crate::domain::model::{RenderResult, SiteData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait DataSource: Send + Sync {
    fn fetch(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_location(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn archive(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SiteData>;
    async fn transform(&self, data: SiteData) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<String>;
}
