use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;
use webext_kit::core::PackageConfig;
use webext_kit::{ArchiveJob, JobEngine, LocalStorage};

#[derive(Clone)]
struct TestConfig {
    source_dir: String,
    output_path: String,
    archive_name: String,
}

impl PackageConfig for TestConfig {
    fn source_dir(&self) -> &str {
        &self.source_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn archive_name(&self) -> &str {
        &self.archive_name
    }
}

fn config_for(source: &Path, output: &Path) -> TestConfig {
    TestConfig {
        source_dir: source.to_str().unwrap().to_string(),
        output_path: output.to_str().unwrap().to_string(),
        archive_name: "extension.zip".to_string(),
    }
}

fn write_extension_tree(root: &Path) {
    std::fs::write(root.join("manifest.json"), b"{\"manifest_version\": 3}").unwrap();
    std::fs::create_dir_all(root.join("icons")).unwrap();
    std::fs::write(root.join("icons/icon16.png"), b"fake-png-data").unwrap();
    std::fs::create_dir_all(root.join("scripts")).unwrap();
    std::fs::write(root.join("scripts/background.js"), b"console.log('bg');").unwrap();
}

async fn run_job(source: &Path, output: &Path) {
    let config = config_for(source, output);
    let storage = LocalStorage::new(config.output_path.clone());
    JobEngine::new(ArchiveJob::new(storage, config))
        .run()
        .await
        .unwrap();
}

fn entry_names(archive_path: &Path) -> Vec<String> {
    let data = std::fs::read(archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_end_to_end_packaging() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_extension_tree(source.path());

    let config = config_for(source.path(), output.path());
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = JobEngine::new(ArchiveJob::new(storage, config));

    let location = engine.run().await.unwrap();
    assert!(location.ends_with("extension.zip"));

    let archive_path = output.path().join("extension.zip");
    assert!(archive_path.exists());

    assert_eq!(
        entry_names(&archive_path),
        vec!["icons/icon16.png", "manifest.json", "scripts/background.js"]
    );
}

#[tokio::test]
async fn test_round_trip_preserves_bytes() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_extension_tree(source.path());

    let config = config_for(source.path(), output.path());
    let storage = LocalStorage::new(config.output_path.clone());
    JobEngine::new(ArchiveJob::new(storage, config))
        .run()
        .await
        .unwrap();

    let data = std::fs::read(output.path().join("extension.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();

    for name in ["manifest.json", "icons/icon16.png", "scripts/background.js"] {
        let mut stored = Vec::new();
        std::io::Read::read_to_end(&mut archive.by_name(name).unwrap(), &mut stored).unwrap();

        let original = std::fs::read(source.path().join(name)).unwrap();
        assert_eq!(stored, original, "content mismatch for {}", name);
    }
}

#[tokio::test]
async fn test_packaging_twice_is_idempotent() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_extension_tree(source.path());

    let archive_path = output.path().join("extension.zip");

    run_job(source.path(), output.path()).await;
    let first = entry_names(&archive_path);
    run_job(source.path(), output.path()).await;
    let second = entry_names(&archive_path);

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_source_creates_empty_archive() {
    let output = TempDir::new().unwrap();

    let config = TestConfig {
        source_dir: output
            .path()
            .join("does-not-exist")
            .to_str()
            .unwrap()
            .to_string(),
        output_path: output.path().to_str().unwrap().to_string(),
        archive_name: "extension.zip".to_string(),
    };

    let storage = LocalStorage::new(config.output_path.clone());
    JobEngine::new(ArchiveJob::new(storage, config))
        .run()
        .await
        .unwrap();

    let archive_path = output.path().join("extension.zip");
    assert!(archive_path.exists());
    assert!(entry_names(&archive_path).is_empty());
}
