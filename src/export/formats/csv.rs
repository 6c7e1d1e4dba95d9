use crate::motif::table::MotifTable;
use std::fs::File;
use std::io::{BufWriter, Write};

// Column order is a compatibility contract with downstream consumers.
pub const CSV_HEADER: &str = "accession,count_forward,positions_forward,count_reverse_complement,positions_reverse_complement,length,density_forward,density_reverse_complement";

pub fn write(table: &MotifTable, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_HEADER)?;
    for record in &table.records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            record.accession,
            record.forward.count,
            format_positions(&record.forward.positions),
            record.reverse.count,
            format_positions(&record.reverse.positions),
            record.length,
            record.density_forward,
            record.density_reverse
        )?;
    }
    writer.flush()?;

    Ok(())
}

/// Position lists are quoted because they contain the field separator.
fn format_positions(positions: &[usize]) -> String {
    let joined = positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("\"[{}]\"", joined)
}
