use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search nucleotide records for a DNA motif on both strands
    Scan {
        /// Motif to search for (exact match, case-sensitive)
        motif: String,

        /// NCBI nucleotide accession numbers to fetch and scan
        #[arg(required = true)]
        accessions: Vec<String>,

        /// Output file for the result table
        #[arg(short = 'o', long = "output")]
        output_file: Option<String>,

        /// Format of the output file (default: csv)
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}
