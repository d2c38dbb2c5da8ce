use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dna_nametag::cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("dna_nametag=debug,info")
    } else {
        EnvFilter::new("dna_nametag=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        None => cli::generate::run(&cli.generate, cli.format),
        Some(cli::Commands::Generate(args)) => cli::generate::run(args, cli.format),
        Some(cli::Commands::Stats(args)) => cli::stats::run(args, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
