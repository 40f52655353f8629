use crate::core::{DataSource, Storage};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// 從本地目錄讀取資源（離線建置）
#[derive(Debug, Clone)]
pub struct LocalSource {
    base_path: String,
}

impl LocalSource {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl DataSource for LocalSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = fs::read(full_path)?;
        Ok(data)
    }
}

/// 從 http(s) base URL 抓取資源
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        storage.write_file("nested/out.html", b"<html>").await.unwrap();
        let data = storage.read_file("nested/out.html").await.unwrap();
        assert_eq!(data, b"<html>");
    }

    #[tokio::test]
    async fn test_local_source_reads_relative_paths() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/profile.json"), b"{}").unwrap();

        let source = LocalSource::new(dir.path().to_str().unwrap().to_string());
        assert_eq!(source.fetch("data/profile.json").await.unwrap(), b"{}");
        assert!(source.fetch("data/missing.json").await.is_err());
    }

    #[tokio::test]
    async fn test_http_source_fetches_relative_to_base() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/data/profile.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"name":"A"}"#);
        });

        // base URL 結尾的斜線要被吸收
        let source = HttpSource::new(format!("{}/", server.base_url()));
        let bytes = source.fetch("data/profile.json").await.unwrap();

        mock.assert();
        assert_eq!(bytes, br#"{"name":"A"}"#);
    }

    #[tokio::test]
    async fn test_http_source_maps_error_status_to_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/data/profile.json");
            then.status(500);
        });

        let source = HttpSource::new(server.base_url());
        assert!(source.fetch("data/profile.json").await.is_err());
    }
}
