//! End-to-end tests: registry -> dataset plugin -> tokio commands -> files on disk

use std::sync::Arc;

use dataset_io_core::application::{DatasetIoPlugin, IoService};
use dataset_io_core::domain::{Dataset, Item};
use dataset_io_core::port::IoPlugin;
use dataset_io_infra_system::{
    wired_dataset_plugin, ExecutionConfig, FormatConfig, FormatDatasetService,
};
use futures::future::join_all;

fn io_service() -> IoService {
    let plugin = wired_dataset_plugin(&ExecutionConfig::default(), &FormatConfig::default());
    let plugins: Vec<Arc<dyn IoPlugin>> = vec![Arc::new(plugin)];
    IoService::new(plugins)
}

fn sample(name: &str) -> Dataset {
    Dataset::new(name, vec![2, 2, 3], (0..12).map(|v| v as f64).collect()).unwrap()
}

fn path_str(dir: &tempfile::TempDir, file: &str) -> String {
    dir.path().join(file).to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_save_then_open_through_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_str(&dir, "stack.json");
    let io = io_service();

    io.save(Item::from(sample("stack")), &path).await.unwrap();
    let opened = io.open(&path).await.unwrap().unwrap();

    let dataset = opened.into_dataset().unwrap();
    assert_eq!(dataset.as_ref(), &sample("stack"));
}

#[tokio::test]
async fn test_saved_file_is_a_json_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_str(&dir, "doc.json");

    io_service()
        .save(Item::from(sample("doc")), &path)
        .await
        .unwrap();

    let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc["name"], "doc");
    assert_eq!(doc["dims"], serde_json::json!([2, 2, 3]));
    assert_eq!(doc["data"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_convert_into_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let source = path_str(&dir, "in.json");
    let destination = path_str(&dir, "out/converted/in.json");
    let io = io_service();

    io.save(Item::from(sample("in")), &source).await.unwrap();
    let item = io.open(&source).await.unwrap().unwrap();
    io.save(item, &destination).await.unwrap();

    assert!(std::path::Path::new(&destination).is_file());
    assert!(io.open(&destination).await.unwrap().is_some());
}

#[tokio::test]
async fn test_concurrent_saves_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let io = io_service();

    let paths: Vec<String> = (0..8).map(|i| path_str(&dir, &format!("{}.json", i))).collect();
    let saves = paths
        .iter()
        .enumerate()
        .map(|(i, path)| io.save(Item::from(sample(&format!("ds-{}", i))), path));
    for result in join_all(saves).await {
        result.unwrap();
    }

    let opens = join_all(paths.iter().map(|path| io.open(path))).await;
    for (i, result) in opens.into_iter().enumerate() {
        let dataset = result.unwrap().unwrap().into_dataset().unwrap();
        assert_eq!(dataset.name(), format!("ds-{}", i));
    }
}

#[tokio::test]
async fn test_plugin_without_execution_collaborators_declines() {
    let dir = tempfile::tempdir().unwrap();
    let path = path_str(&dir, "present.json");
    io_service()
        .save(Item::from(sample("present")), &path)
        .await
        .unwrap();

    // Capability bound, command/module services unbound
    let plugin = DatasetIoPlugin::builder()
        .dataset_service(Arc::new(FormatDatasetService::default()))
        .build();

    assert!(plugin.supports_open(&path));
    assert!(plugin.open(&path).await.unwrap().is_none());

    let unsaved = path_str(&dir, "unsaved.json");
    plugin
        .save(Item::from(sample("unsaved")), &unsaved)
        .await
        .unwrap();
    assert!(!std::path::Path::new(&unsaved).exists());
}
