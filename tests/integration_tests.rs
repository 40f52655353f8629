use foliogen::{CliConfig, HttpSource, LocalStorage, SiteEngine, SitePipeline};
use httpmock::prelude::*;
use tempfile::TempDir;

fn bundled_template() -> String {
    format!("{}/assets/template.html", env!("CARGO_MANIFEST_DIR"))
}

fn bundled_root() -> String {
    env!("CARGO_MANIFEST_DIR").to_string()
}

fn cli_config(data_source: String, output_path: String) -> CliConfig {
    CliConfig {
        data_source,
        template: bundled_template(),
        output_path,
        archive: false,
        config: None,
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_with_bundled_sample_data() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = cli_config(bundled_root(), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let source = foliogen::LocalSource::new(bundled_root());
    let pipeline = SitePipeline::new(source, storage, config);
    let engine = SiteEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());

    let page =
        std::fs::read_to_string(std::path::Path::new(&output_path).join("index.html")).unwrap();

    // hero + title come from profile.json
    assert!(page.contains("Jordan Reyes"));
    assert!(page.contains("<title>Jordan Reyes — Backend Engineer Portfolio</title>"));
    // each data file feeds its section
    assert!(page.contains("skill-card"));
    assert!(page.contains("Meridian Labs"));
    assert!(page.contains("University of Lisbon"));
    assert!(page.contains("queuesight"));
    assert!(page.contains("Certified Kubernetes Administrator"));
    assert!(page.contains("wa.me/15555550123"));
}

#[tokio::test]
async fn test_end_to_end_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let profile_mock = server.mock(|when, then| {
        when.method(GET).path("/data/profile.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "name": "A", "role": "B", "tagline": "C",
                "about": "About text", "cvLink": "cv.pdf"
            }));
    });
    let skills_mock = server.mock(|when, then| {
        when.method(GET).path("/data/skills.json");
        then.status(200).json_body(serde_json::json!({
            "categories": [{"icon": "fa-solid fa-server", "title": "Backend", "skills": ["Rust"]}]
        }));
    });
    let experience_mock = server.mock(|when, then| {
        when.method(GET).path("/data/experience.json");
        then.status(200).json_body(serde_json::json!({
            "experiences": [{"company": "Acme", "period": "2020", "role": "Dev", "contributions": ["x"]}]
        }));
    });
    let projects_mock = server.mock(|when, then| {
        when.method(GET).path("/data/projects.json");
        then.status(200).json_body(serde_json::json!({
            "projects": [{"name": "P", "role": "Lead", "description": "D", "tech": ["Rust"]}],
            "certifications": []
        }));
    });
    let education_mock = server.mock(|when, then| {
        when.method(GET).path("/data/education.json");
        then.status(200)
            .json_body(serde_json::json!({ "education": [] }));
    });

    let config = cli_config(server.base_url(), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SitePipeline::new(HttpSource::new(server.base_url()), storage, config);
    let engine = SiteEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());

    profile_mock.assert();
    skills_mock.assert();
    experience_mock.assert();
    projects_mock.assert();
    education_mock.assert();

    let page =
        std::fs::read_to_string(std::path::Path::new(&output_path).join("index.html")).unwrap();
    assert!(page.contains("<title>A — B Portfolio</title>"));
    assert!(page.contains(r#"href="cv.pdf""#));
    // empty lists hide both grid sections
    assert!(page.contains(r#"<section id="education" style="display:none">"#));
    assert!(page.contains(r#"<section id="certifications" style="display:none">"#));
}

#[tokio::test]
async fn test_archive_produces_zip_next_to_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(bundled_root(), output_path.clone());
    config.archive = true;
    let storage = LocalStorage::new(output_path.clone());
    let source = foliogen::LocalSource::new(bundled_root());
    let pipeline = SitePipeline::new(source, storage, config);

    SiteEngine::new(pipeline).run().await.unwrap();

    let zip_path = std::path::Path::new(&output_path).join("site.zip");
    assert!(zip_path.exists());

    let zip_data = std::fs::read(&zip_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();
    assert_eq!(archive.len(), 1);

    let mut page = String::new();
    std::io::Read::read_to_string(&mut archive.by_name("index.html").unwrap(), &mut page).unwrap();
    assert!(page.contains("Jordan Reyes"));
}
