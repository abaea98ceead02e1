//! Integration tests for `generate` and `check` against a real filesystem.

use slack_codegen::{check, compute_hash, generate};
use slack_codegen_core::{CodegenConfig, Error, Metadata};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DECLARATION: &str = "export declare abstract class Methods {
    readonly auth: {
        /**
         * @description Checks authentication.
         */
        test: MethodWithOptionalArgument<AuthTestArguments, AuthTestResponse>;
    };
    readonly chat: {
        postMessage: MethodWithRequiredArgument<ChatPostMessageArguments, ChatPostMessageResponse>;
        scheduledMessages: {
            list: MethodWithOptionalArgument<ChatScheduledMessagesListArguments, ChatScheduledMessagesListResponse>;
        };
    };
}
";

/// Lays out a project root with the SDK's declaration and manifest.
fn project(declaration: &str) -> (TempDir, CodegenConfig) {
    let dir = TempDir::new().unwrap();
    let config = CodegenConfig::from_root(dir.path());

    let package_dir = config.input_path.parent().unwrap();
    fs::create_dir_all(package_dir).unwrap();
    fs::write(&config.input_path, declaration).unwrap();
    fs::write(
        &config.manifest_path,
        r#"{"name": "@slack/web-api", "version": "7.9.1"}"#,
    )
    .unwrap();

    (dir, config)
}

fn read_metadata(path: &Path) -> Metadata {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_generate_writes_services_index_and_metadata() {
    let (_dir, config) = project(DECLARATION);

    let report = generate(&config).await.unwrap();
    assert_eq!(report.namespace_count, 2);
    assert_eq!(report.method_count, 3);
    assert_eq!(report.slack_web_api_version, "7.9.1");
    assert_eq!(report.files.len(), 3);
    assert!(report.files[2].ends_with("index.ts"));

    for name in ["AuthService.ts", "ChatService.ts", "index.ts"] {
        assert!(config.output_dir.join(name).is_file(), "missing {name}");
    }

    let chat = fs::read_to_string(config.output_dir.join("ChatService.ts")).unwrap();
    assert!(chat.contains("const ScheduledMessagesList = (args?: ChatScheduledMessagesListArguments) =>"));
    assert!(chat.contains("        list: ScheduledMessagesList,\n"));

    let metadata = read_metadata(&config.metadata_path);
    assert_eq!(metadata.slack_web_api_version, "7.9.1");
    assert_eq!(metadata.methods_file_hash, compute_hash(DECLARATION));
    assert_eq!(metadata.method_count, 3);
}

#[tokio::test]
async fn test_generate_creates_nested_output_dir() {
    let (dir, config) = project(DECLARATION);
    let config = config
        .with_output_dir(dir.path().join("deep/nested/generated"))
        .with_metadata_path(dir.path().join("deep/nested/generated/_metadata.json"));

    generate(&config).await.unwrap();
    assert!(config.output_dir.join("index.ts").is_file());
    assert!(config.metadata_path.is_file());
}

#[tokio::test]
async fn test_generate_is_stable_across_runs() {
    let (_dir, config) = project(DECLARATION);

    generate(&config).await.unwrap();
    let first = fs::read_to_string(config.output_dir.join("ChatService.ts")).unwrap();
    generate(&config).await.unwrap();
    let second = fs::read_to_string(config.output_dir.join("ChatService.ts")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_generate_missing_manifest() {
    let (_dir, config) = project(DECLARATION);
    fs::remove_file(&config.manifest_path).unwrap();

    let err = generate(&config).await.unwrap_err();
    assert!(matches!(err, Error::ManifestNotFound { .. }));
    assert!(!config.output_dir.exists());
}

#[tokio::test]
async fn test_generate_manifest_without_version() {
    let (_dir, config) = project(DECLARATION);
    fs::write(&config.manifest_path, r#"{"name": "@slack/web-api"}"#).unwrap();

    let err = generate(&config).await.unwrap_err();
    assert!(matches!(err, Error::ManifestUnreadable { .. }));
}

#[tokio::test]
async fn test_generate_missing_input() {
    let (_dir, config) = project(DECLARATION);
    fs::remove_file(&config.input_path).unwrap();

    let err = generate(&config).await.unwrap_err();
    assert!(matches!(err, Error::InputNotFound { .. }));
}

#[tokio::test]
async fn test_generate_propagates_parse_error() {
    let (_dir, config) = project("export declare class WebClient {}\n");

    let err = generate(&config).await.unwrap_err();
    assert!(matches!(err, Error::MethodsClassNotFound { .. }));
    assert!(!config.metadata_path.exists());
}

#[tokio::test]
async fn test_generate_output_dir_is_a_file() {
    let (dir, config) = project(DECLARATION);
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let config = config.with_output_dir(blocker.join("generated"));

    let err = generate(&config).await.unwrap_err();
    assert!(matches!(err, Error::OutputDirectoryUncreatable { .. }));
}

#[tokio::test]
async fn test_generate_write_failure_skips_metadata() {
    let (_dir, config) = project(DECLARATION);
    fs::create_dir_all(config.output_dir.join("ChatService.ts")).unwrap();

    let err = generate(&config).await.unwrap_err();
    match err {
        Error::WriteFailed { path, .. } => assert!(path.ends_with("ChatService.ts")),
        other => panic!("expected WriteFailed, got {other:?}"),
    }
    assert!(!config.output_dir.join("index.ts").exists());
    assert!(!config.metadata_path.exists());
}

#[tokio::test]
async fn test_check_after_generate_is_up_to_date() {
    let (_dir, config) = project(DECLARATION);
    generate(&config).await.unwrap();

    let report = check(&config).await.unwrap();
    assert_eq!(report.methods_file_hash, compute_hash(DECLARATION));
    assert_eq!(report.slack_web_api_version, "7.9.1");
}

#[tokio::test]
async fn test_check_detects_changed_declaration() {
    let (_dir, config) = project(DECLARATION);
    generate(&config).await.unwrap();

    let changed = DECLARATION.replace("Checks authentication.", "Checks auth.");
    fs::write(&config.input_path, &changed).unwrap();

    match check(&config).await.unwrap_err() {
        Error::OutOfDate {
            stored_hash,
            current_hash,
        } => {
            assert_eq!(stored_hash, compute_hash(DECLARATION));
            assert_eq!(current_hash, compute_hash(&changed));
        }
        other => panic!("expected OutOfDate, got {other:?}"),
    }
}

#[tokio::test]
async fn test_check_missing_metadata() {
    let (_dir, config) = project(DECLARATION);

    let err = check(&config).await.unwrap_err();
    assert!(matches!(err, Error::MetadataNotFound { .. }));
}

#[tokio::test]
async fn test_check_corrupt_metadata() {
    let (_dir, config) = project(DECLARATION);
    fs::create_dir_all(&config.output_dir).unwrap();
    fs::write(&config.metadata_path, "not json").unwrap();

    let err = check(&config).await.unwrap_err();
    assert!(matches!(err, Error::MetadataUnreadable { .. }));
}

#[tokio::test]
async fn test_check_does_not_parse_or_write() {
    let (_dir, config) = project("not a declaration at all");
    fs::create_dir_all(&config.output_dir).unwrap();
    let metadata = Metadata::new("7.9.1", compute_hash("not a declaration at all"), 0);
    fs::write(
        &config.metadata_path,
        serde_json::to_string_pretty(&metadata).unwrap(),
    )
    .unwrap();

    check(&config).await.unwrap();
    let entries = fs::read_dir(&config.output_dir).unwrap().count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn test_check_reports_missing_input_before_metadata() {
    let (_dir, config) = project(DECLARATION);
    fs::remove_file(&config.input_path).unwrap();

    let err = check(&config).await.unwrap_err();
    assert!(matches!(err, Error::InputNotFound { .. }));
}
