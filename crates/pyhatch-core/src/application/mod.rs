//! Application layer for pyhatch.
//!
//! This layer contains:
//! - **Services**: use case orchestration (create, build, publish)
//! - **Ports**: trait definitions for the filesystem, templates, external
//!   commands and the user
//! - **Errors**: application-specific error types
//!
//! The services coordinate the domain layer; every side effect goes
//! through a port so the services can run against in-memory adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BuildReport, BuildService, ConfigResolver, CreateReport, CreateService,
    EnvironmentProvisioner, FieldDefaults, PackageIndex, ProvisionOutcome, PublishReport,
    ScaffoldService, Toolchain, VcsInitializer,
};

pub use ports::{
    CommandOutcome, CommandRunner, CommandSpec, Filesystem, Prompter, Question, TemplateStore,
};

pub use error::ApplicationError;
