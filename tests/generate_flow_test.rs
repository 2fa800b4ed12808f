//! End-to-end scaffolding flow against a real directory tree

use ngforge_core::{ArtifactKind, GenerateRequest, ProjectConfig, Scaffolder, VirtualTree};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HOST: &str = r#"import { Component } from '@angular/core';
import { Bar } from './bar';

@Component({
  selector: 'app-root',
  imports: [Bar],
})
export class AppComponent {}
"#;

fn project_on_disk() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/app")).unwrap();
    fs::write(dir.path().join("src/app/app.component.ts"), HOST).unwrap();
    dir
}

#[test]
fn test_spec_end_to_end_scenario() {
    // name `foo`, no prefix, project prefix `app`, host containing
    // `@Component({ imports: [Bar] })`
    let dir = project_on_disk();
    let mut scaffolder = Scaffolder::new(
        ProjectConfig::default(),
        VirtualTree::at_root(dir.path()),
    )
    .unwrap();

    let request = GenerateRequest::new("foo", ArtifactKind::Directive);
    let summary = scaffolder.generate(&request).unwrap();

    assert_eq!(summary.selector, "app-foo");
    assert_eq!(summary.class_name, "FooDirective");

    // The new identifier is appended as the last element of the collection.
    let host = fs::read_to_string(dir.path().join("src/app/app.component.ts")).unwrap();
    assert!(host.contains("imports: [Bar, [FooDirective]]"), "host was: {host}");

    // All original text outside the list is unchanged byte-for-byte.
    let insert = ", [FooDirective]";
    let pos = host.find(insert).unwrap();
    let mut reconstructed = host.clone();
    reconstructed.replace_range(pos..pos + insert.len(), "");
    assert_eq!(reconstructed, HOST);

    // The templated file is staged at the resolved path with the rendered
    // selector.
    let generated = fs::read_to_string(dir.path().join("src/app/foo/foo.directive.ts")).unwrap();
    assert!(generated.contains("app-foo"));
    assert!(generated.contains("export class FooDirective {}"));
}

#[test]
fn test_element_count_grows_by_exactly_one() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/app")).unwrap();
    fs::write(
        dir.path().join("src/app/app.module.ts"),
        r#"import { NgModule } from '@angular/core';

@NgModule({
  imports: [A, B, C],
})
export class AppModule {}
"#,
    )
    .unwrap();

    let mut scaffolder = Scaffolder::new(
        ProjectConfig::default(),
        VirtualTree::at_root(dir.path()),
    )
    .unwrap();

    scaffolder
        .generate(&GenerateRequest::new("foo", ArtifactKind::Directive))
        .unwrap();

    let host = fs::read_to_string(dir.path().join("src/app/app.module.ts")).unwrap();
    assert!(host.contains("imports: [A, B, C, [FooDirective]]"), "host was: {host}");
}

#[test]
fn test_missing_collection_leaves_disk_untouched() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/app")).unwrap();
    let original = r#"import { Component } from '@angular/core';

@Component({
  selector: 'app-root',
})
export class AppComponent {}
"#;
    fs::write(dir.path().join("src/app/app.component.ts"), original).unwrap();

    let mut scaffolder = Scaffolder::new(
        ProjectConfig::default(),
        VirtualTree::at_root(dir.path()),
    )
    .unwrap();

    let err = scaffolder
        .generate(&GenerateRequest::new("foo", ArtifactKind::Directive))
        .unwrap_err();
    assert!(matches!(err, ngforge_core::Error::MissingCollection { .. }));

    assert_eq!(
        fs::read_to_string(dir.path().join("src/app/app.component.ts")).unwrap(),
        original
    );
    assert!(!dir.path().join("src/app/foo").exists());
}

#[test]
fn test_unparseable_host_is_fatal_before_any_write() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/app")).unwrap();
    fs::write(
        dir.path().join("src/app/app.component.ts"),
        "@Component({ imports: [Bar }\nexport class Broken {",
    )
    .unwrap();

    let mut scaffolder = Scaffolder::new(
        ProjectConfig::default(),
        VirtualTree::at_root(dir.path()),
    )
    .unwrap();

    let err = scaffolder
        .generate(&GenerateRequest::new("foo", ArtifactKind::Directive))
        .unwrap_err();
    assert!(matches!(err, ngforge_core::Error::ParseFailure { .. }));
    assert!(!dir.path().join("src/app/foo").exists());
}

#[test]
fn test_missing_source_root_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();

    let mut scaffolder = Scaffolder::new(
        ProjectConfig::default(),
        VirtualTree::at_root(dir.path()),
    )
    .unwrap();

    let err = scaffolder
        .generate(&GenerateRequest::new("foo", ArtifactKind::Directive))
        .unwrap_err();
    assert!(matches!(err, ngforge_core::Error::Configuration(_)));
}

#[test]
fn test_config_file_drives_the_scaffolder() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("web/src")).unwrap();
    fs::write(
        dir.path().join("web/src/shell.component.ts"),
        r#"import { Component } from '@angular/core';

@Component({
  imports: [],
})
export class ShellComponent {}
"#,
    )
    .unwrap();

    let config_json = serde_json::json!({
        "prefix": "acme",
        "source_root": "web/src"
    });
    fs::write(
        dir.path().join(".ngforge.json"),
        serde_json::to_string_pretty(&config_json).unwrap(),
    )
    .unwrap();

    let config = ProjectConfig::load_or_default(dir.path()).unwrap();
    assert_eq!(config.prefix, "acme");

    let mut scaffolder = Scaffolder::new(config, VirtualTree::at_root(dir.path())).unwrap();
    let summary = scaffolder
        .generate(&GenerateRequest::new("badge", ArtifactKind::Directive))
        .unwrap();
    assert_eq!(summary.selector, "acme-badge");
    assert!(dir.path().join("web/src/badge/badge.directive.ts").exists());
}

#[test]
fn test_custom_config_prefix_and_source_root() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("web/src")).unwrap();
    fs::write(
        dir.path().join("web/src/shell.component.ts"),
        r#"import { Component } from '@angular/core';

@Component({
  imports: [],
})
export class ShellComponent {}
"#,
    )
    .unwrap();

    let config = ProjectConfig {
        prefix: "acme".to_string(),
        source_root: Path::new("web/src").to_path_buf(),
    };
    let mut scaffolder = Scaffolder::new(config, VirtualTree::at_root(dir.path())).unwrap();

    let summary = scaffolder
        .generate(&GenerateRequest::new("toolbar", ArtifactKind::Component))
        .unwrap();

    assert_eq!(summary.selector, "acme-toolbar");
    let generated =
        fs::read_to_string(dir.path().join("web/src/toolbar/toolbar.component.ts")).unwrap();
    assert!(generated.contains("selector: 'acme-toolbar'"));
}
