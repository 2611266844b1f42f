//! Core domain layer for pyhatch.
//!
//! Pure data and rules with no I/O: the package configuration record, the
//! enumerated choices, template variable substitution and the planned
//! on-disk layout. Filesystem, templates, prompts and subprocesses are
//! reached only through the ports in `crate::application`.

pub mod error;
pub mod layout;
pub mod package_config;
pub mod project_structure;
pub mod render_context;
pub mod value_objects;

pub use error::DomainError;
pub use package_config::{PackageConfig, PackageConfigBuilder, package_name_from_path};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use render_context::RenderContext;
pub use value_objects::{EnvironmentKind, License, PackageName, TestFramework};
