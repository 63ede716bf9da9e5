use crate::commands::{GlobalArgs, ResourceArgs, Workspace};
use crate::errors::CliError;
use crate::ui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub resources: ResourceArgs,
}

pub fn run_list(global: &GlobalArgs, args: ListArgs) -> Result<(), CliError> {
    let workspace = Workspace::discover(global)?;
    let repository = workspace.repository(&args.resources.resources, None)?;

    let definitions = repository.all_messages();
    if definitions.is_empty() {
        ui::print_no_definitions();
        return Ok(());
    }

    for definition in &definitions {
        ui::print_definition(definition);
    }
    Ok(())
}
