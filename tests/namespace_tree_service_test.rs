//! Tests for NamespaceTreeService and the namespace sources

use std::path::Path;
use std::sync::Arc;

use hns_tree::application::services::NamespaceTreeService;
use hns_tree::application::{ApplicationError, OutputFormat, RenderError};
use hns_tree::cli::CliError;
use hns_tree::config::Settings;
use hns_tree::domain::Node;
use hns_tree::exitcode;
use hns_tree::infrastructure::di::ServiceContainer;
use hns_tree::infrastructure::{
    InfraError, InfraResult, ManifestSource, NamespaceSource, StaticSource,
    SUBNAMESPACE_OF_ANNOTATION,
};
use hns_tree::util::testing::{init_test_setup, resources};
use hns_tree::Resource;
use tempfile::TempDir;

const FIXTURE: &str = "tests/resources/namespaces.yaml";

/// Source that always fails, standing in for an unreachable cluster.
struct FailingSource;

impl NamespaceSource for FailingSource {
    fn fetch(&self) -> InfraResult<Vec<Resource>> {
        Err(InfraError::io(
            "connect to cluster",
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        ))
    }
}

fn show(service: &NamespaceTreeService, format: OutputFormat) -> String {
    let mut buf = Vec::new();
    service.show(format, &mut buf).expect("show forest");
    String::from_utf8(buf).unwrap()
}

#[test]
fn given_static_source_when_showing_tree_then_renders_hierarchy() {
    // Arrange
    init_test_setup();
    let source = StaticSource::new(resources(&[
        ("b", Some("a")),
        ("a", None),
        ("c", Some("a")),
    ]));
    let service = NamespaceTreeService::new(Arc::new(source));

    // Act
    let out = show(&service, OutputFormat::Tree);

    // Assert
    assert_eq!(out, "a\n├── b\n└── c\n");
}

#[test]
fn given_manifest_fixture_when_building_forest_then_orphan_dropped() {
    let source = ManifestSource::new(FIXTURE, SUBNAMESPACE_OF_ANNOTATION);
    let service = NamespaceTreeService::new(Arc::new(source));

    let forest = service.forest().expect("build forest");

    assert_eq!(
        forest,
        vec![
            Node::new("acme-org").with_children(vec![
                Node::new("team-billing"),
                Node::new("team-payments").with_children(vec![Node::new("payments-staging")]),
            ]),
            Node::new("default"),
            Node::new("kube-system"),
        ]
    );
}

#[test]
fn given_manifest_fixture_when_showing_json_then_parses_to_forest() {
    let source = ManifestSource::new(FIXTURE, SUBNAMESPACE_OF_ANNOTATION);
    let service = NamespaceTreeService::new(Arc::new(source));

    let out = show(&service, OutputFormat::Json);
    let parsed: Vec<Node> = serde_json::from_str(&out).unwrap();

    assert_eq!(parsed, service.forest().unwrap());
}

#[test]
fn given_custom_annotation_when_building_forest_then_hnc_annotation_ignored() {
    let source = ManifestSource::new(FIXTURE, "example.com/parent");
    let service = NamespaceTreeService::new(Arc::new(source));

    let forest = service.forest().expect("build forest");

    assert_eq!(forest.len(), 7);
    assert!(forest.iter().all(Node::is_leaf));
}

#[test]
fn given_missing_manifest_when_showing_then_fetch_error_with_noinput_code() {
    let source = ManifestSource::new(Path::new("/nonexistent/namespaces.yaml"), "x");
    let service = NamespaceTreeService::new(Arc::new(source));

    let err = service
        .show(OutputFormat::Tree, &mut Vec::<u8>::new())
        .expect_err("missing file must fail");

    assert!(matches!(err, ApplicationError::Fetch(InfraError::Io { .. })));
    assert_eq!(CliError::from(err).exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_malformed_manifest_when_fetching_then_manifest_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "items: [unterminated\n").unwrap();
    let source = ManifestSource::new(&path, SUBNAMESPACE_OF_ANNOTATION);

    let err = source.fetch().expect_err("malformed manifest must fail");

    match &err {
        InfraError::Manifest { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected manifest error, got {:?}", other),
    }
    let app_err = ApplicationError::from(err);
    assert_eq!(CliError::from(app_err).exit_code(), exitcode::DATAERR);
}

#[test]
fn given_failing_source_when_showing_then_nothing_written() {
    let service = NamespaceTreeService::new(Arc::new(FailingSource));
    let mut buf = Vec::new();

    let result = service.show(OutputFormat::Yaml, &mut buf);

    assert!(result.is_err());
    assert!(buf.is_empty());
}

#[test]
fn given_settings_with_file_when_wiring_container_then_uses_manifest() {
    let settings = Settings {
        file: Some(FIXTURE.into()),
        ..Settings::default()
    };
    let container = ServiceContainer::new(settings);

    let forest = container.namespace_tree().forest().expect("build forest");

    assert_eq!(forest.len(), 3);
}

#[test]
fn given_custom_deps_when_wiring_container_then_uses_injected_source() {
    let source = StaticSource::new(resources(&[("only", None)]));
    let container = ServiceContainer::with_deps(Settings::default(), Arc::new(source));

    let forest = container.namespace_tree().forest().unwrap();

    assert_eq!(forest, vec![Node::new("only")]);
}

/// Writer that rejects every write, like a closed pipe.
struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[rstest::rstest]
#[case(OutputFormat::Tree)]
#[case(OutputFormat::Json)]
#[case(OutputFormat::Yaml)]
fn given_failing_writer_when_showing_then_render_io_error_with_ioerr_code(
    #[case] format: OutputFormat,
) {
    let source = StaticSource::new(resources(&[("a", None), ("b", Some("a"))]));
    let service = NamespaceTreeService::new(Arc::new(source));

    let err = service
        .show(format, &mut ClosedPipe)
        .expect_err("write must fail");

    assert!(
        matches!(err, ApplicationError::Render(RenderError::Io(_))),
        "got {:?}",
        err
    );
    assert_eq!(CliError::from(err).exit_code(), exitcode::IOERR);
}

#[test]
fn given_missing_manifest_when_displaying_error_then_includes_os_reason() {
    let source = ManifestSource::new("/nonexistent/namespaces.yaml", "x");

    let err = source.fetch().expect_err("missing file must fail");

    let message = err.to_string();
    assert!(message.contains("read /nonexistent/namespaces.yaml"));
    match &err {
        InfraError::Io { source, .. } => assert!(message.ends_with(&source.to_string())),
        other => panic!("expected I/O error, got {:?}", other),
    }
}
