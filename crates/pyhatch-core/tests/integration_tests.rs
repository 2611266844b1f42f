//! End-to-end use cases wired to the real adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pyhatch_adapters::{
    BuiltinTemplates, InMemoryTemplates, LocalFilesystem, MemoryFilesystem, RecordingRunner,
};
use pyhatch_core::{
    application::{
        ApplicationError, BuildService, ConfigResolver, CreateService, FieldDefaults, Filesystem,
        PackageIndex, ProvisionOutcome, TemplateStore, Toolchain,
    },
    error::{ErrorCategory, PyhatchError},
};
use tempfile::TempDir;

fn create_service(fs: Arc<dyn Filesystem>, runner: RecordingRunner) -> CreateService {
    CreateService::new(
        Arc::new(BuiltinTemplates::new()),
        fs,
        Arc::new(runner),
        &Toolchain::default(),
    )
}

#[test]
#[cfg(unix)]
fn create_with_defaults_on_disk() {
    let work = TempDir::new().unwrap();
    let root = work.path().join("myapp");
    let runner = RecordingRunner::new();

    let config = ConfigResolver::default().resolve_defaults(&root, false).unwrap();
    let report = create_service(Arc::new(LocalFilesystem::new()), runner.clone())
        .create(&config)
        .unwrap();

    let main_py = std::fs::read_to_string(root.join("myapp/main.py")).unwrap();
    assert!(main_py.contains("def main():"));
    assert!(main_py.contains("__version__ = \"0.0.0.1\""));

    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# myapp\n"));

    let license = std::fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.starts_with("MIT License"));
    assert!(license.contains("Copyright (c) Your Name"));

    let setup = std::fs::read_to_string(root.join("setup.py")).unwrap();
    assert!(setup.contains("myapp=myapp.main:main"));
    assert!(setup.contains("License :: OSI Approved :: MIT License"));

    assert!(root.join("myapp/__init__.py").is_file());
    assert!(root.join("tests/test_project.py").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("makefile").is_file());
    assert_eq!(report.files.len(), 8);

    let lines = runner.command_lines();
    assert!(lines[0].starts_with("python3 -m venv"));
    assert!(lines[0].ends_with("--prompt myapp"));
    assert!(lines.last().unwrap().starts_with("git init"));
    assert!(matches!(report.environment, ProvisionOutcome::Venv { .. }));
}

#[test]
fn second_create_without_force_changes_nothing() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("/work/myapp");
    let config = ConfigResolver::default().resolve_defaults(root, false).unwrap();

    create_service(Arc::new(fs.clone()), RecordingRunner::new())
        .create(&config)
        .unwrap();
    let before = fs.file_paths();

    let runner = RecordingRunner::new();
    let err = create_service(Arc::new(fs.clone()), runner.clone())
        .create(&config)
        .unwrap_err();

    assert!(matches!(
        err,
        PyhatchError::Application(ApplicationError::TargetNotEmpty { .. })
    ));
    assert_eq!(fs.file_paths(), before);
    assert!(runner.calls().is_empty());
}

#[test]
fn force_overwrites_generated_files() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("/work/myapp");

    let first = ConfigResolver::default().resolve_defaults(root, false).unwrap();
    create_service(Arc::new(fs.clone()), RecordingRunner::new())
        .create(&first)
        .unwrap();
    assert_eq!(
        fs.read_link(&root.join("activate-venv")),
        Some(
            PathBuf::from("venv")
                .join(if cfg!(windows) { "Scripts" } else { "bin" })
                .join("activate")
        )
    );

    // Hand edits to the marker files survive a forced re-create.
    fs.write_file(&root.join("myapp/__init__.py"), "from .main import main\n")
        .unwrap();
    fs.write_file(&root.join("Pipfile"), "[packages]\nrequests = \"*\"\n")
        .unwrap();

    let defaults = FieldDefaults {
        author: "Grace".into(),
        license: "bsd3".into(),
        environment: "pipenv".into(),
        ..FieldDefaults::default()
    };
    let second = ConfigResolver::new(defaults).resolve_defaults(root, true).unwrap();
    create_service(Arc::new(fs.clone()), RecordingRunner::new())
        .create(&second)
        .unwrap();

    let license = fs.read_file(&root.join("LICENSE")).unwrap();
    assert!(license.starts_with("BSD 3-Clause License"));
    assert!(license.contains("Grace"));
    assert_eq!(
        fs.read_file(&root.join("Pipfile")).as_deref(),
        Some("[packages]\nrequests = \"*\"\n")
    );
    assert_eq!(
        fs.read_file(&root.join("myapp/__init__.py")).as_deref(),
        Some("from .main import main\n")
    );
}

#[test]
fn fresh_pipenv_create_writes_empty_pipfile() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("/work/pkg");
    let defaults = FieldDefaults {
        environment: "Pipenv".into(),
        ..FieldDefaults::default()
    };
    let config = ConfigResolver::new(defaults).resolve_defaults(root, false).unwrap();
    create_service(Arc::new(fs.clone()), RecordingRunner::new())
        .create(&config)
        .unwrap();

    assert_eq!(fs.read_file(&root.join("Pipfile")).as_deref(), Some(""));
    assert_eq!(fs.read_file(&root.join("pkg/__init__.py")).as_deref(), Some(""));
}

#[test]
fn missing_template_aborts_before_anything_is_written() {
    let builtin = BuiltinTemplates::new();
    let templates = InMemoryTemplates::new();
    for name in builtin.names().filter(|name| *name != "setup.py") {
        templates.insert(name, builtin.get(name).unwrap());
    }
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    let service = CreateService::new(
        Arc::new(templates),
        Arc::new(fs.clone()),
        Arc::new(runner.clone()),
        &Toolchain::default(),
    );

    let config = ConfigResolver::default()
        .resolve_defaults(Path::new("/work/myapp"), false)
        .unwrap();
    let err = service.create(&config).unwrap_err();

    assert!(matches!(
        err,
        PyhatchError::Application(ApplicationError::TemplateNotFound { ref name }) if name == "setup.py"
    ));
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(fs.file_paths().is_empty());
    assert!(runner.calls().is_empty());
}

#[test]
fn custom_templates_are_rendered() {
    let templates = InMemoryTemplates::new();
    let builtin = BuiltinTemplates::new();
    for name in builtin.names() {
        templates.insert(name, builtin.get(name).unwrap());
    }
    templates.insert("README.md", "{{NAME}}: {{DESCRIPTION}}\n");

    let fs = MemoryFilesystem::new();
    let service = CreateService::new(
        Arc::new(templates),
        Arc::new(fs.clone()),
        Arc::new(RecordingRunner::new()),
        &Toolchain::default(),
    );
    let defaults = FieldDefaults {
        description: "A tiny tool".into(),
        ..FieldDefaults::default()
    };
    let config = ConfigResolver::new(defaults)
        .resolve_defaults(Path::new("/work/tool"), false)
        .unwrap();
    service.create(&config).unwrap();

    assert_eq!(
        fs.read_file(Path::new("/work/tool/README.md")).as_deref(),
        Some("tool: A tiny tool\n")
    );
}

#[test]
fn every_license_variant_renders_its_text() {
    let cases = [
        ("mit", "MIT License"),
        ("gplv3", "GNU General Public License"),
        ("apache2", "Apache License, Version 2.0"),
        ("bsd3", "BSD 3-Clause License"),
        ("WTFPL", "WTFPL License\n\nCopyright (c) Ada"),
    ];

    for (license, expected) in cases {
        let fs = MemoryFilesystem::new();
        let root = Path::new("/work/pkg");
        let defaults = FieldDefaults {
            author: "Ada".into(),
            license: license.into(),
            environment: "poetry".into(),
            ..FieldDefaults::default()
        };
        let config = ConfigResolver::new(defaults).resolve_defaults(root, false).unwrap();
        let report = create_service(Arc::new(fs.clone()), RecordingRunner::new())
            .create(&config)
            .unwrap();

        let text = fs.read_file(&root.join("LICENSE")).unwrap();
        assert!(text.contains(expected), "{license}: {text}");
        assert!(text.contains("Ada"));
        assert!(matches!(report.environment, ProvisionOutcome::Skipped { .. }));
    }
}

#[test]
fn failing_git_aborts_create() {
    let fs = MemoryFilesystem::new();
    let config = ConfigResolver::default()
        .resolve_defaults(Path::new("/work/myapp"), false)
        .unwrap();
    let runner = RecordingRunner::new().exit_with("git", Some(128));

    let err = create_service(Arc::new(fs), runner).create(&config).unwrap_err();
    assert!(err.to_string().contains("returncode 128"));
}

#[test]
fn build_then_publish_to_staging() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("/work/pkg");
    fs.create_dir_all(&root.join("dist")).unwrap();
    fs.write_file(&root.join("setup.py"), "").unwrap();

    let runner = RecordingRunner::new();
    let service = BuildService::new(
        Arc::new(fs.clone()),
        Arc::new(runner.clone()),
        Toolchain::default(),
    );

    let built = service.build(root).unwrap();
    assert!(built.artifacts.is_empty());

    fs.write_file(&root.join("dist/pkg-0.1.tar.gz"), "").unwrap();
    service.publish(root, PackageIndex::Staging).unwrap();

    assert_eq!(
        runner.command_lines(),
        [
            "pip install --upgrade --quiet setuptools wheel twine",
            "python3 setup.py --quiet sdist bdist_wheel",
            "python3 -m twine upload --repository-url https://test.pypi.org/simple/ /work/pkg/dist/pkg-0.1.tar.gz",
        ]
    );

    let err = service.build(root).unwrap_err();
    assert!(matches!(
        err,
        PyhatchError::Application(ApplicationError::StaleBuildOutput { .. })
    ));
}
