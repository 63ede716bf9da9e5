use crate::commands::{GlobalArgs, ResourceArgs, Workspace};
use crate::errors::CliError;
use clap::Parser;
use msgrepo::{FixedPrincipal, Locale, PrincipalProvider};
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct TraceArgs {
    /// Message id; unknown ids still produce a line
    pub id: u32,

    /// Trace locale (default: `trace_locale` from msgrepo.toml)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Show this user in the user column
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Positional parameter; repeat for `{0}`, `{1}`, ...
    #[arg(short, long = "param", value_name = "VALUE")]
    pub params: Vec<String>,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

pub fn run_trace(global: &GlobalArgs, args: TraceArgs) -> Result<(), CliError> {
    let workspace = Workspace::discover(global)?;
    let principal = args
        .user
        .clone()
        .map(|name| Arc::new(FixedPrincipal(name)) as Arc<dyn PrincipalProvider>);
    let repository = workspace.repository(&args.resources.resources, principal)?;

    if let Some(locale) = args.locale {
        repository.set_trace_locale(locale);
    }
    if args.user.is_some() {
        repository.set_show_current_user_in_traces(true);
    }

    println!(
        "{}",
        repository.trace_message_with_params(args.id, args.params.as_slice())
    );
    Ok(())
}
