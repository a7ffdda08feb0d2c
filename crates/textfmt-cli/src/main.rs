//! textfmt CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use textfmt_cli::cli::{Cli, Command, OutputFormatArg};
use textfmt_cli::commands::{
    run_case, run_compare, run_decode, run_euro, run_indexes, run_normalize, run_pick, run_price,
    run_urls,
};
use textfmt_cli::logging::{LogConfig, init_logging};
use textfmt_cli::output::{comparison_plain, price_plain, price_table, to_json};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> Result<i32> {
    match command {
        Command::Price(args) => {
            let rows = run_price(args);
            match args.format {
                OutputFormatArg::Table => println!("{}", price_table(&rows, args.explain)),
                OutputFormatArg::Plain => println!("{}", price_plain(&rows, args.explain)),
                OutputFormatArg::Json => println!("{}", to_json(&rows)?),
            }
        }
        Command::Euro(args) => print_lines(&run_euro(&args.values)),
        Command::Normalize(args) => println!("{}", run_normalize(args)),
        Command::Case(args) => println!("{}", run_case(args)),
        Command::Urls(args) => print_lines(&run_urls(&args.text)),
        Command::Decode(args) => println!("{}", run_decode(&args.text)),
        Command::Compare(args) => {
            let comparison = run_compare(args);
            match args.format {
                OutputFormatArg::Json => println!("{}", to_json(&comparison)?),
                OutputFormatArg::Table | OutputFormatArg::Plain => {
                    println!("{}", comparison_plain(&comparison));
                }
            }
            return Ok(if comparison.equal { 0 } else { 1 });
        }
        Command::Pick(args) => println!("{}", run_pick(args)?),
        Command::Indexes(args) => {
            let indexes = run_indexes(args);
            print_lines(&indexes);
        }
    }
    Ok(0)
}

fn print_lines<T: std::fmt::Display>(values: &[T]) {
    for value in values {
        println!("{value}");
    }
}

/// An explicit `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        use_env_filter: cli.log_level.is_none() && !cli.verbosity.is_present(),
        ..LogConfig::default()
    }
    .with_level_filter(level_filter)
    .with_format(cli.log_format.into())
    .with_ansi(with_ansi)
    .with_log_file(cli.log_file.clone())
}
