use crate::export::ScanExport;
use crate::motif::table::MotifTable;
use std::fs::File;
use std::io::BufWriter;

pub fn write(table: &MotifTable, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let export = ScanExport::from_table(table);
    serde_json::to_writer_pretty(writer, &export)?;

    Ok(())
}
