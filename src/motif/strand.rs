/// Reverse complement of a DNA sequence: complement each base through the
/// fixed pairing A<->T, G<->C, then reverse the whole string. Characters
/// outside the pairing table (ambiguity codes, lowercase bases) pass through
/// unchanged.
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().map(complement).rev().collect()
}

fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}
