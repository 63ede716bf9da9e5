use crate::commands::{GlobalArgs, Workspace};
use crate::errors::CliError;
use crate::ui;
use clap::Parser;
use msgrepo::ResourceLoader;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Resource whose codes become constants
    pub resource: String,

    /// File to write
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Name used in the generated header (default: the resource name)
    #[arg(short, long, value_name = "NAME")]
    pub module: Option<String>,
}

pub fn run_generate(global: &GlobalArgs, args: GenerateArgs) -> Result<(), CliError> {
    let workspace = Workspace::discover(global)?;
    let loader = ResourceLoader::new(Arc::new(workspace.source()));

    let definitions = loader
        .load(&args.resource)
        .map_err(|err| workspace.diagnose(err))?;

    let module = args.module.as_deref().unwrap_or(&args.resource);
    let written = msgrepo_generate::generate(module, &definitions, &args.output)?;
    ui::print_generated(&args.output, written);
    Ok(())
}
