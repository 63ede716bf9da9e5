//! Loads catalog resources into one repository, surfacing the first problem.

use crate::commands::{GlobalArgs, Workspace};
use crate::errors::{CliError, NoResourcesError};
use crate::ui;
use clap::Parser;
use msgrepo::Repository;
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Resources to check (default: the configured `resources`)
    #[arg(value_name = "RESOURCE")]
    pub resources: Vec<String>,
}

pub fn run_check(global: &GlobalArgs, args: CheckArgs) -> Result<(), CliError> {
    let workspace = Workspace::discover(global)?;

    let resources = if args.resources.is_empty() {
        workspace.config.resources.clone()
    } else {
        args.resources
    };
    if resources.is_empty() {
        return Err(NoResourcesError.into());
    }

    ui::print_check_header();

    let repository = Repository::builder()
        .source(Arc::new(workspace.source()))
        .build();

    for resource in &resources {
        match repository.load_resource(resource) {
            Ok(outcome) => ui::print_loaded(resource, &outcome),
            Err(err) => {
                ui::print_check_failed(resource);
                return Err(workspace.diagnose(err));
            },
        }
    }

    ui::print_check_success(repository.len());
    Ok(())
}
