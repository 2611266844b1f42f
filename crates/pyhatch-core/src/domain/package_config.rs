//! The immutable record describing one package to create.

use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    layout,
    value_objects::{EnvironmentKind, License, PackageName, TestFramework},
};

/// Everything needed to scaffold a package.
///
/// Built once per `create` invocation by the configuration resolver and
/// only read afterwards. The package name is always the final segment of
/// `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageConfig {
    path: PathBuf,
    name: PackageName,
    version: String,
    description: String,
    entrypoint: String,
    repo_url: String,
    author: String,
    email: String,
    environment: EnvironmentKind,
    license: License,
    test_framework: TestFramework,
    force: bool,
}

impl PackageConfig {
    /// Start building a config rooted at `path` (must be absolute).
    pub fn builder(path: impl Into<PathBuf>) -> PackageConfigBuilder {
        PackageConfigBuilder {
            path: path.into(),
            version: String::new(),
            description: String::new(),
            entrypoint: "main.py".into(),
            repo_url: String::new(),
            author: String::new(),
            email: String::new(),
            environment: EnvironmentKind::default(),
            license: License::default(),
            test_framework: TestFramework::default(),
            force: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// File name of the entry module, e.g. `main.py`.
    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    /// Module name of the entry point, e.g. `main` for `main.py`.
    pub fn entry_module(&self) -> &str {
        self.entrypoint
            .strip_suffix(".py")
            .unwrap_or(&self.entrypoint)
    }

    /// Console script declaration: `name=name.module:main`.
    pub fn console_entry_point(&self) -> String {
        format!(
            "{name}={name}.{module}:main",
            name = self.name,
            module = self.entry_module()
        )
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn environment(&self) -> &EnvironmentKind {
        &self.environment
    }

    pub fn license(&self) -> &License {
        &self.license
    }

    pub fn test_framework(&self) -> &TestFramework {
        &self.test_framework
    }

    pub fn force(&self) -> bool {
        self.force
    }
}

/// Builder for [`PackageConfig`]; `build` validates the path and name.
#[derive(Debug, Clone)]
pub struct PackageConfigBuilder {
    path: PathBuf,
    version: String,
    description: String,
    entrypoint: String,
    repo_url: String,
    author: String,
    email: String,
    environment: EnvironmentKind,
    license: License,
    test_framework: TestFramework,
    force: bool,
}

impl PackageConfigBuilder {
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn entrypoint(mut self, entrypoint: impl Into<String>) -> Self {
        self.entrypoint = entrypoint.into();
        self
    }

    pub fn repo_url(mut self, repo_url: impl Into<String>) -> Self {
        self.repo_url = repo_url.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn environment(mut self, environment: EnvironmentKind) -> Self {
        self.environment = environment;
        self
    }

    pub fn license(mut self, license: License) -> Self {
        self.license = license;
        self
    }

    pub fn test_framework(mut self, test_framework: TestFramework) -> Self {
        self.test_framework = test_framework;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn build(self) -> Result<PackageConfig, DomainError> {
        if !self.path.is_absolute() {
            return Err(DomainError::InvalidPath {
                path: self.path.display().to_string(),
                reason: "path must be absolute".into(),
            });
        }

        let name = package_name_from_path(&self.path)?;

        let entrypoint = self.entrypoint.trim();
        if entrypoint.is_empty()
            || entrypoint.contains(['/', '\\'])
            || matches!(entrypoint, "." | ".." | ".py")
        {
            return Err(DomainError::InvalidEntrypoint {
                entrypoint: self.entrypoint.clone(),
                reason: "entry point must be a plain file name such as main.py".into(),
            });
        }
        if entrypoint == layout::INIT_PY {
            return Err(DomainError::InvalidEntrypoint {
                entrypoint: self.entrypoint.clone(),
                reason: "__init__.py is generated empty; pick another module name".into(),
            });
        }

        Ok(PackageConfig {
            name,
            entrypoint: entrypoint.to_string(),
            path: self.path,
            version: self.version,
            description: self.description,
            repo_url: self.repo_url,
            author: self.author,
            email: self.email,
            environment: self.environment,
            license: self.license,
            test_framework: self.test_framework,
            force: self.force,
        })
    }
}

/// Derive the package name from the final segment of `path`.
pub fn package_name_from_path(path: &Path) -> Result<PackageName, DomainError> {
    let segment = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DomainError::InvalidPath {
            path: path.display().to_string(),
            reason: "cannot extract a package name from the last path segment".into(),
        })?;
    PackageName::new(segment)
}
