use thiserror::Error;

pub mod entrez;

pub use entrez::EntrezClient;

/// Per-accession retrieval errors.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("malformed FASTA response: {0}")]
    Malformed(#[from] std::io::Error),

    #[error("no FASTA record in response")]
    EmptyResponse,
}

/// Supplies raw sequence text for external record identifiers.
///
/// Implementations must strip any description/header lines so that the
/// returned string contains residues only.
pub trait SequenceSource {
    fn fetch_sequence(&self, accession: &str) -> Result<String, FetchError>;

    /// Fetch each accession independently, carrying per-accession outcomes.
    /// A failure for one accession never aborts the batch.
    fn fetch_all(&self, accessions: &[String]) -> Vec<(String, Result<String, FetchError>)> {
        accessions
            .iter()
            .map(|acc| (acc.clone(), self.fetch_sequence(acc)))
            .collect()
    }
}
