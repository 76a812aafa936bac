//! Command handlers, one module per subcommand.

pub mod engine;
pub mod login;
pub mod run;
pub mod submit;
pub mod update;
pub mod versions;

use anyhow::Result;
use mm_cli::Project;

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Locate the project from the working directory and surface config warnings.
pub(crate) fn load_project(ui: &UiContext) -> Result<Project> {
    let project = Project::discover()?;
    if !ui.json {
        print_config_warnings(&project.config_path(), &project.warnings, ui);
    }
    Ok(project)
}
