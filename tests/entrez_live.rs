use motif_tools::config::Config;
use motif_tools::motif::find_positions;
use motif_tools::ncbi::{EntrezClient, SequenceSource};

// These tests hit the live NCBI E-utilities endpoint; ignored by default.
// Run with:
//   cargo test --test entrez_live -- --ignored --nocapture

#[test]
#[ignore]
fn fetch_phix174_and_scan() {
    let config = Config::default();
    let client = EntrezClient::new(&config).expect("build entrez client");

    let seq = client
        .fetch_sequence("NC_001422.1")
        .expect("fetch phiX174 genome");

    eprintln!("NC_001422.1: {} bases", seq.len());
    assert_eq!(seq.len(), 5386, "phiX174 genome length");
    assert!(seq.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));

    // The genome is non-trivial, so a 3-mer must occur somewhere
    let hits = find_positions(&seq, "GAT");
    assert!(!hits.is_empty());
}

#[test]
#[ignore]
fn bogus_accession_is_an_error_not_a_panic() {
    let config = Config::default();
    let client = EntrezClient::new(&config).expect("build entrez client");

    let result = client.fetch_sequence("THIS_IS_NOT_AN_ACCESSION_12345");
    eprintln!("bogus accession outcome: {:?}", result.as_ref().err());
    assert!(result.is_err() || result.unwrap().is_empty());
}
