use std::path::Path;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use swiface::{
    AccessLevel, CleanOutcome, ExternalFormatter, GenerateOptions, InterfaceGenerator,
    SourceKittenProducer,
};

fn cli() -> Command {
    Command::new("swiface")
        .about("Generate readable interface files for Swift modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Extract and render a module's public-facing interface")
                .arg(
                    Arg::new("module")
                        .long("module")
                        .help("Module to document (passed to sourcekitten as --module-name)"),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .default_value(".")
                        .help("Folder the compiler invocation runs in"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .default_value(".")
                        .help("Folder the generated interface is written to"),
                )
                .arg(
                    Arg::new("access-level")
                        .long("access-level")
                        .default_value("public")
                        .help("Minimum access level to include (private, fileprivate, internal, public, open)"),
                )
                .arg(
                    Arg::new("format-command")
                        .long("format-command")
                        .default_value("swiftformat")
                        .help("Formatter executable the assembled text is piped through"),
                )
                .arg(
                    Arg::new("clean")
                        .long("clean")
                        .action(ArgAction::SetTrue)
                        .help("Delete a previously generated file before generating"),
                )
                .arg(
                    Arg::new("compiler-args")
                        .num_args(0..)
                        .last(true)
                        .help("Arguments passed through to the compiler invocation"),
                ),
        )
        .subcommand(
            Command::new("clean")
                .about("Delete a previously generated interface file")
                .arg(
                    Arg::new("module")
                        .long("module")
                        .help("Module whose generated interface should be deleted"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .default_value(".")
                        .help("Folder the generated interface was written to"),
                ),
        )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("generate", sub)) => {
            let minimum = AccessLevel::from_flag(sub.get_one::<String>("access-level").unwrap())?;
            let compiler_args: Vec<String> = sub
                .get_many::<String>("compiler-args")
                .map(|args| args.cloned().collect())
                .unwrap_or_default();

            let options = GenerateOptions {
                module: sub.get_one::<String>("module").cloned(),
                output: sub.get_one::<String>("output").unwrap().into(),
                minimum_access_level: minimum,
                clean_first: sub.get_flag("clean"),
                compiler_args,
            };

            let input = sub.get_one::<String>("input").unwrap();
            let format_command = sub.get_one::<String>("format-command").unwrap();
            let generator = InterfaceGenerator::with_collaborators(
                Box::new(SourceKittenProducer::new().working_dir(input.as_str())),
                Box::new(ExternalFormatter::with_command(format_command.as_str())),
            );

            let path = generator.generate(&options)?;
            println!("Generated {}", path.display());
        }
        Some(("clean", sub)) => {
            let generator = InterfaceGenerator::new();
            let output = sub.get_one::<String>("output").unwrap();
            let module = sub.get_one::<String>("module").map(String::as_str);

            match generator.clean(Path::new(output), module)? {
                CleanOutcome::Removed(path) => println!("Removed {}", path.display()),
                CleanOutcome::NotFound(path) => {
                    println!("Nothing to clean at {}", path.display())
                }
            }
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}
