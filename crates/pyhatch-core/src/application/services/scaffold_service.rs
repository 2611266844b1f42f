//! Scaffold Service - plans and writes the package skeleton.
//!
//! The workflow is split in two:
//! 1. `plan`: render every template into a `ProjectStructure` (no I/O
//!    besides template lookup)
//! 2. `write`: materialize the structure through the `Filesystem` port
//!
//! Writes are create-or-truncate, so running over an existing package
//! (`--force`) replaces the generated files and leaves everything else.

use std::path::Path;
use std::sync::Arc;

use chrono::Datelike;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::{FsEntry, License, PackageConfig, ProjectStructure, RenderContext, TestFramework, layout},
    error::PyhatchResult,
};

/// Names of the templates every package needs.
pub mod templates {
    pub const README: &str = "README.md";
    pub const SETUP_PY: &str = "setup.py";
    pub const ENTRYPOINT: &str = "entrypoint.py";
    pub const GITIGNORE: &str = "gitignore";
    pub const MAKEFILE: &str = "makefile";
}

pub struct ScaffoldService {
    templates: Arc<dyn TemplateStore>,
    filesystem: Arc<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(templates: Arc<dyn TemplateStore>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Plan and write the package, stamping licenses with the current year.
    #[instrument(skip_all, fields(package = %config.name()))]
    pub fn scaffold(&self, config: &PackageConfig) -> PyhatchResult<ProjectStructure> {
        let year = chrono::Local::now().year();
        let structure = self.plan(config, year)?;
        self.write(&structure)?;
        info!(entries = structure.entry_count(), "Scaffold written");
        Ok(structure)
    }

    /// Render the full layout for `config` without touching the disk.
    pub fn plan(&self, config: &PackageConfig, year: i32) -> PyhatchResult<ProjectStructure> {
        let context = RenderContext::for_package(config, year);
        let name = config.name().as_str();
        let package_dir = Path::new(name);

        let mut structure = ProjectStructure::new(config.path());
        structure.add_directory(package_dir);
        structure.add_placeholder(package_dir.join(layout::INIT_PY));
        structure.add_file(
            package_dir.join(config.entrypoint()),
            self.render(templates::ENTRYPOINT, &context)?,
        );
        structure.add_file(layout::README, self.render(templates::README, &context)?);
        structure.add_file(layout::SETUP_PY, self.render(templates::SETUP_PY, &context)?);
        structure.add_file(layout::LICENSE, self.license_text(config.license(), &context)?);
        structure.add_file(layout::GITIGNORE, self.render(templates::GITIGNORE, &context)?);
        structure.add_file(layout::MAKEFILE, self.render(templates::MAKEFILE, &context)?);

        match config.test_framework() {
            TestFramework::None => debug!("No test framework selected"),
            TestFramework::Unrecognized(other) => {
                warn!(framework = %other, "Unrecognized test framework, skipping tests directory");
            }
            framework => {
                if let Some(template) = framework.template_name() {
                    structure.add_directory(layout::TESTS_DIR);
                    structure.add_file(
                        Path::new(layout::TESTS_DIR).join(layout::TEST_FILE),
                        self.render(template, &context)?,
                    );
                }
            }
        }

        structure.validate()?;
        Ok(structure)
    }

    /// Materialize `structure` under its root, in entry order.
    pub fn write(&self, structure: &ProjectStructure) -> PyhatchResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    if file.keep_existing {
                        debug!(path = %path.display(), "Touching file");
                        self.filesystem.touch(&path)?;
                    } else {
                        debug!(path = %path.display(), "Writing file");
                        self.filesystem.write_file(&path, &file.content)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, name: &str, context: &RenderContext) -> PyhatchResult<String> {
        let template = self.templates.get(name)?;
        Ok(context.render(&template))
    }

    fn license_text(&self, license: &License, context: &RenderContext) -> PyhatchResult<String> {
        match license.template_name() {
            Some(template) => self.render(template, context),
            None => Ok(format!(
                "{} License\n\nCopyright (c) {}",
                license.as_str(),
                context.get("AUTHOR").unwrap_or_default()
            )),
        }
    }
}
