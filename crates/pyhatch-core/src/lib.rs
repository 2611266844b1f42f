//! pyhatch Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `pyhatch`, a
//! tool that scaffolds, builds and publishes Python packages.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pyhatch-cli (CLI)             │
//! │   create / build / publish dispatcher   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ConfigResolver, ScaffoldService,       │
//! │  EnvironmentProvisioner, VcsInitializer │
//! │  BuildService, CreateService            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Filesystem, TemplateStore,              │
//! │ CommandRunner, Prompter                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pyhatch-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pyhatch_core::{
//!     application::{CreateService, FieldDefaults, ConfigResolver},
//!     domain::PackageConfig,
//! };
//!
//! # fn demo(service: CreateService) -> pyhatch_core::error::PyhatchResult<()> {
//! let config = ConfigResolver::new(FieldDefaults::default())
//!     .resolve_defaults(Path::new("/tmp/work/myapp"), false)?;
//! let report = service.create(&config)?;
//! # let _ = report;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildService, CommandOutcome, CommandRunner, CommandSpec, ConfigResolver, CreateReport,
        CreateService, EnvironmentProvisioner, FieldDefaults, Filesystem, PackageIndex,
        ProvisionOutcome, Prompter, Question, ScaffoldService, TemplateStore, Toolchain,
        VcsInitializer,
    };
    pub use crate::domain::{
        EnvironmentKind, License, PackageConfig, PackageName, ProjectStructure, RenderContext,
        TestFramework,
    };
    pub use crate::error::{PyhatchError, PyhatchResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
