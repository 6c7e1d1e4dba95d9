use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::motif::table::{build_table, MotifTable};
use crate::ncbi::EntrezClient;
use indicatif::{ProgressBar, ProgressStyle};

pub fn run(
    motif: String,
    accessions: Vec<String>,
    output_file: Option<String>,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if motif.is_empty() {
        return Err("motif must not be empty".into());
    }

    let config = Config::load();
    let client = EntrezClient::new(&config)?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    progress.set_message(format!(
        "Fetching {} record(s) from NCBI...",
        accessions.len()
    ));

    let table = build_table(&motif, &accessions, &client);

    progress.finish_with_message(format!(
        "Scanned {} of {} record(s)",
        table.len(),
        accessions.len()
    ));

    print_table(&table);

    if let Some(path) = output_file {
        export::write_table(&table, &path, format)?;
        println!("Results written to {}", path);
    }

    Ok(())
}

fn print_table(table: &MotifTable) {
    if table.is_empty() {
        println!("No records to report for motif {}", table.motif);
        return;
    }

    println!(
        "{:<16} {:>8} {:>8} {:>10} {:>14} {:>14}",
        "Accession", "Fwd", "Rev", "Length", "Fwd density", "Rev density"
    );
    for record in &table.records {
        println!(
            "{:<16} {:>8} {:>8} {:>10} {:>14.6} {:>14.6}",
            record.accession,
            record.forward.count,
            record.reverse.count,
            record.length,
            record.density_forward,
            record.density_reverse
        );
    }
}
