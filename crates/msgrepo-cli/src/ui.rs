// Terminal output. Results go to stdout; problems to stderr.

use colored::Colorize as _;
use msgrepo::{LoadOutcome, MessageDefinition};
use std::path::Path;

pub fn print_check_header() {
    println!("{}", "msgrepo catalog check".dimmed());
}

pub fn print_loaded(resource: &str, outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Loaded(summary) => println!(
            "{} {} {}",
            "Loaded".green(),
            resource.bold(),
            format!(
                "({} new, {} unchanged)",
                summary.inserted, summary.unchanged
            )
            .dimmed()
        ),
        LoadOutcome::AlreadyLoaded => {
            println!("{} {}", "Skipped".yellow(), resource.bold())
        },
    }
}

pub fn print_check_failed(resource: &str) {
    eprintln!("{} {}", "Failed".red().bold(), resource.bold());
}

pub fn print_check_success(messages: usize) {
    println!(
        "{} {}",
        "No issues found!".green(),
        format!("({messages} messages)").dimmed()
    );
}

pub fn print_no_definitions() {
    eprintln!("{}", "No message definitions loaded.".yellow());
}

/// One summary line per definition, locale overrides indented below it.
pub fn print_definition(definition: &MessageDefinition) {
    let code = definition.code();
    let severity = code.level().map(|level| level.to_string()).unwrap_or_default();

    println!(
        "{:>7}  {:<16} {:<5}  {}  {}",
        definition.id().to_string().cyan(),
        code.kind().to_string(),
        severity.yellow(),
        definition.name().unwrap_or("-").bold(),
        definition.default_template()
    );
    for (locale, template) in definition.localized() {
        println!("{:>9}{:<14} {}", "", locale.to_string().dimmed(), template);
    }
}

pub fn print_generated(path: &Path, written: bool) {
    if written {
        println!("{} {}", "Generated".green(), path.display());
    } else {
        println!("{} {}", "Unchanged".dimmed(), path.display());
    }
}
