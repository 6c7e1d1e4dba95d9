use super::{FetchError, SequenceSource};
use crate::config::Config;
use bio::io::fasta;
use std::time::Duration;

/// Blocking client for the NCBI E-utilities efetch endpoint.
pub struct EntrezClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl EntrezClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.download_timeout))
            .build()?;

        Ok(EntrezClient {
            client,
            base_url: config.eutils_base.clone(),
        })
    }
}

impl SequenceSource for EntrezClient {
    fn fetch_sequence(&self, accession: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("db", "nucleotide"),
                ("id", accession),
                ("rettype", "fasta"),
                ("retmode", "text"),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        parse_fasta_body(&response.text()?)
    }
}

/// Extract the residues of the first FASTA record in `body`. The description
/// line is dropped and wrapped sequence lines are joined.
fn parse_fasta_body(body: &str) -> Result<String, FetchError> {
    let reader = fasta::Reader::new(body.as_bytes());
    let record = reader
        .records()
        .next()
        .ok_or(FetchError::EmptyResponse)??;

    Ok(String::from_utf8_lossy(record.seq()).into_owned())
}
