use crate::commands::{GlobalArgs, ResourceArgs, Workspace};
use crate::errors::CliError;
use clap::Parser;
use msgrepo::Locale;

#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Message id
    pub id: u32,

    /// Locale to render in, e.g. `de_CH` (default: the current locale)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Positional parameter; repeat for `{0}`, `{1}`, ...
    #[arg(short, long = "param", value_name = "VALUE")]
    pub params: Vec<String>,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

pub fn run_render(global: &GlobalArgs, args: RenderArgs) -> Result<(), CliError> {
    let workspace = Workspace::discover(global)?;
    let repository = workspace.repository(&args.resources.resources, None)?;

    let locale = args.locale.unwrap_or_else(|| repository.current_locale());
    let text = repository.message(args.id, &locale, args.params.as_slice())?;
    println!("{text}");
    Ok(())
}
