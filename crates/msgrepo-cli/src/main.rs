use clap::{Parser, Subcommand};
use msgrepo_cli::commands::{
    CheckArgs, GenerateArgs, GlobalArgs, ListArgs, RenderArgs, TraceArgs, run_check,
    run_generate, run_list, run_render, run_trace,
};
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "msgrepo")]
#[command(about = "Check, inspect and render message catalogs")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load catalog resources into one repository and report problems
    Check(CheckArgs),

    /// Print every loaded definition
    List(ListArgs),

    /// Print the resolved text of a message
    Render(RenderArgs),

    /// Print the trace line of a message
    Trace(TraceArgs),

    /// Generate a Rust module of code constants from a resource
    Generate(GenerateArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    msgrepo_cli::logging::init_logging(cli.global.verbose);

    let result = match cli.command {
        Commands::Check(args) => run_check(&cli.global, args),
        Commands::List(args) => run_list(&cli.global, args),
        Commands::Render(args) => run_render(&cli.global, args),
        Commands::Trace(args) => run_trace(&cli.global, args),
        Commands::Generate(args) => run_generate(&cli.global, args),
    };

    result.map_err(miette::Report::new)
}
