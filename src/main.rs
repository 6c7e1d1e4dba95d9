use clap::Parser;
use motif_tools::{cli, commands};

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Scan {
            motif,
            accessions,
            output_file,
            format,
        } => commands::scan::run(motif, accessions, output_file, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
