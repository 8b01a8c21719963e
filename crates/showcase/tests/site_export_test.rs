use std::fs;

use tempfile::tempdir;

use showcase::{Showcase, config::AppConfig, site::SiteBuilder};

#[test]
fn test_site_export_writes_every_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let site_dir = temp_dir.path().join("site");

    let showcase = Showcase::default();
    let manifest = SiteBuilder::new(&showcase)
        .build(&site_dir)
        .expect("Failed to export site");

    for file in manifest.files() {
        assert!(site_dir.join(file).is_file(), "missing {file}");
    }

    let index = fs::read_to_string(site_dir.join("index.html")).expect("Failed to read index");
    for page in manifest.pages() {
        assert!(
            index.contains(page.file_name()),
            "index misses {}",
            page.file_name()
        );
    }
}

#[test]
fn test_site_export_uses_base_path() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config: AppConfig = toml::from_str(
        r#"
        [site]
        base_path = "/Adaptive-Profiler-Demo/"
        "#,
    )
    .expect("Failed to parse config");

    let showcase = Showcase::new(config);
    SiteBuilder::new(&showcase)
        .build(temp_dir.path())
        .expect("Failed to export site");

    let index =
        fs::read_to_string(temp_dir.path().join("index.html")).expect("Failed to read index");
    assert!(index.contains("href=\"/Adaptive-Profiler-Demo/architecture-target.svg\""));
}
