use anaphor_protocol::{Document, MentionId, PairRecord};

use crate::clause::ClauseBoundaries;
use crate::distance::measure;
use crate::error::PairError;
use crate::select::select_pairs;

/// A pair that was selected but could not be measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairDiagnostic {
    pub referent: MentionId,
    pub anaphora: MentionId,
    pub error: PairError,
}

/// Everything one document contributes to the output table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPairs {
    pub document: String,
    /// Measured pairs in extraction order.
    pub records: Vec<PairRecord>,
    pub discarded: Vec<PairDiagnostic>,
    /// Kept records whose word distance is zero or negative.
    pub anomalies: usize,
}

/// Runs the whole engine over one document.
///
/// A pair that fails to measure is dropped and recorded in `discarded`;
/// it never stops the remaining pairs.
pub fn extract_document(doc: &Document) -> DocumentPairs {
    let boundaries = ClauseBoundaries::locate(doc);
    let candidates = select_pairs(doc);

    let mut out = DocumentPairs {
        document: doc.name().to_string(),
        ..DocumentPairs::default()
    };

    for pair in &candidates {
        match measure(doc, &boundaries, pair) {
            Ok(record) => {
                if !record.word_distance.is_positive() {
                    log::warn!(
                        "{}: word distance {} between mentions {} and {}",
                        doc.name(),
                        record.word_distance,
                        pair.referent.id,
                        pair.anaphora.id
                    );
                    out.anomalies += 1;
                }
                out.records.push(record);
            }
            Err(error) => {
                log::warn!(
                    "{}: dropping pair ({}, {}): {error}",
                    doc.name(),
                    pair.referent.id,
                    pair.anaphora.id
                );
                out.discarded.push(PairDiagnostic {
                    referent: pair.referent.id,
                    anaphora: pair.anaphora.id,
                    error,
                });
            }
        }
    }

    log::debug!(
        "{}: {} pairs kept, {} dropped, {} clause boundaries",
        doc.name(),
        out.records.len(),
        out.discarded.len(),
        boundaries.distinct_len()
    );

    out
}
