use clap::Parser;
use ddr_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // RUST_LOG controls library verbosity; default keeps the CLI quiet
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("DDR Processor - Daily Drilling Report Normalizer");
    println!("================================================");
    println!();
    println!("Normalize Region 1 daily drilling report rows from three reporting zones");
    println!("into one canonical 19-field table for downstream reporting tools.");
    println!();
    println!("USAGE:");
    println!("    ddr-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Normalize a raw-row extract into the canonical table (main command)");
    println!("    zones       Report the configured zone grammars and lookup tables");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Normalize an extract, report date taken from the filename token:");
    println!("    ddr-processor process --input \"daily-report tanggal 12 Feb 2026.csv\"");
    println!();
    println!("    # Explicit report date and output path:");
    println!("    ddr-processor process --input rows.csv --report-date 2026-02-12 \\");
    println!("                          --output export/2026-02-12.tsv");
    println!();
    println!("    # Inspect the zone grammars:");
    println!("    ddr-processor zones --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ddr-processor <COMMAND> --help");
}
