use std::path::Path;

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use torpedodepot::annotation::{Annotation, Annotator};
use torpedodepot::{parsing, scanning};

mod input;
mod output;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("torpedodepot")
        .version(VERSION)
        .propagate_version(true)
        .about("Find and validate Torpedodepot email addresses.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debugging output to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Scan a document and report every valid address in it")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Write the matches as a JSON array instead of one line per match."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file to scan, or '-' to read from standard input."),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check whether each argument, taken whole, is a valid address")
                .arg(
                    Arg::new("address")
                        .required(true)
                        .num_args(1..)
                        .help("One or more addresses to validate."),
                ),
        )
        .get_matches();

    let filter = if matches.get_flag("debug") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                check(Path::new(filename), submatches.get_flag("json"));
            }
        }
        Some(("validate", submatches)) => {
            let addresses: Vec<&String> = submatches
                .get_many::<String>("address")
                .map(|values| values.collect())
                .unwrap_or_default();
            validate(&addresses);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: torpedodepot [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn check(filename: &Path, json: bool) {
    info!("Scanning file: {}", filename.display());

    let content = match input::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    };

    let annotator = match Annotator::new() {
        Ok(annotator) => annotator,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    };

    let mut annotations: Vec<Annotation> = Vec::new();
    if let Err(error) = scanning::highlight(&content, &annotator, &mut annotations) {
        eprintln!("{}: {}", "error".bright_red(), error);
        std::process::exit(1);
    }

    let rows = output::rows(&content, &annotations);

    if json {
        match output::to_json(&rows) {
            Ok(result) => println!("{}", result),
            Err(error) => {
                eprintln!("{}: {}", "error".bright_red(), error);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", output::to_text(filename, &rows));
    }
}

fn validate(addresses: &[&String]) {
    let mut failures = 0;

    for address in addresses {
        match parsing::parse(address) {
            Ok(parsed) => {
                debug!(address = %parsed, local = parsed.local);
                println!("{}: {}", address, "valid".green());
            }
            Err(error) => {
                debug!(%error);
                println!("{}: {}", address, "invalid".bright_red());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
