use birdfetch::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Birdfetch - Birding Observation Normalizer");
    println!("==========================================");
    println!();
    println!("Normalize eBird checklist exports and iNaturalist observations into a");
    println!("canonical record stream, and resolve Macaulay Library media to local files.");
    println!();
    println!("USAGE:");
    println!("    birdfetch <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    ingest      Ingest a MyEBirdData.csv export into canonical records");
    println!("    fetch       Download all observations for an iNaturalist user");
    println!("    assets      Resolve Macaulay Library asset ids to local media files");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize an eBird export:");
    println!("    birdfetch ingest MyEBirdData.csv");
    println!();
    println!("    # Write the export as JSON records:");
    println!("    birdfetch ingest MyEBirdData.csv --output-format json -o records.json");
    println!();
    println!("    # Download a user's observations for a season:");
    println!("    birdfetch fetch --user some_birder --after 2024-05-01 --before 2024-06-30");
    println!();
    println!("    # Resolve media by ML catalog number:");
    println!("    birdfetch assets 123456789 987654321");
    println!();
    println!("For detailed help on any command, use:");
    println!("    birdfetch <COMMAND> --help");
}
