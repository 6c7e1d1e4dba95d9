use crate::motif::scanner::find_positions;
use crate::motif::strand::reverse_complement;
use crate::ncbi::SequenceSource;
use serde::Serialize;

/// Hit summary for one strand of one record.
#[derive(Debug, Clone, Serialize)]
pub struct StrandResult {
    pub count: usize,
    pub positions: Vec<usize>,
}

impl StrandResult {
    pub fn from_positions(positions: Vec<usize>) -> Self {
        StrandResult {
            count: positions.len(),
            positions,
        }
    }
}

/// One row of the result table. Records are only ever built for accessions
/// whose sequence was retrieved and non-empty, so the densities are always
/// well defined.
#[derive(Debug, Clone, Serialize)]
pub struct AccessionRecord {
    pub accession: String,
    pub forward: StrandResult,
    #[serde(rename = "reverse_complement")]
    pub reverse: StrandResult,
    pub length: usize,
    pub density_forward: f64,
    #[serde(rename = "density_reverse_complement")]
    pub density_reverse: f64,
}

/// Result table for one motif across a batch of accessions. Row order is the
/// order in which accessions were successfully processed.
#[derive(Debug, Clone)]
pub struct MotifTable {
    pub motif: String,
    pub records: Vec<AccessionRecord>,
}

impl MotifTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, accession: &str) -> Option<&AccessionRecord> {
        self.records.iter().find(|r| r.accession == accession)
    }
}

/// Fetch every accession from `source` and scan both strands for `motif`.
///
/// Each accession is handled independently: a retrieval failure or an empty
/// sequence is reported to stderr and produces no row, and never aborts the
/// rest of the batch.
pub fn build_table(motif: &str, accessions: &[String], source: &dyn SequenceSource) -> MotifTable {
    let mut records = Vec::new();

    for (accession, outcome) in source.fetch_all(accessions) {
        let sequence = match outcome {
            Ok(sequence) => sequence,
            Err(e) => {
                eprintln!("Something went wrong with {}: {}", accession, e);
                continue;
            }
        };

        if sequence.is_empty() {
            eprintln!("No sequence retrieved for {}", accession);
            continue;
        }

        let forward = StrandResult::from_positions(find_positions(&sequence, motif));
        let reverse_seq = reverse_complement(&sequence);
        let reverse = StrandResult::from_positions(find_positions(&reverse_seq, motif));
        let length = sequence.len();

        records.push(AccessionRecord {
            accession,
            density_forward: forward.count as f64 / length as f64,
            density_reverse: reverse.count as f64 / length as f64,
            forward,
            reverse,
            length,
        });
    }

    MotifTable {
        motif: motif.to_string(),
        records,
    }
}
