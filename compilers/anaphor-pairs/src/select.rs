use anaphor_protocol::{Document, Mention};
use anaphor_roles::referring_expression;

/// A referent and the anaphor that follows it in the same cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePair<'d> {
    pub referent: &'d Mention,
    pub anaphora: &'d Mention,
}

/// Walks every cluster in document order and pairs each qualifying mention
/// with the mention immediately before it in the cluster.
///
/// The antecedent is the most recent mention, whether or not that mention
/// is itself a pronoun or definite description. Clusters come in order of
/// first mention, so the output is stable across runs.
pub fn select_pairs(doc: &Document) -> Vec<CandidatePair<'_>> {
    let mut pairs = Vec::new();

    for entity in doc.entities() {
        let mut previous: Option<&Mention> = None;

        for mention in doc.cluster_mentions(entity.id) {
            let words = doc.mention_words(mention);
            if let (Some(_), Some(referent)) = (referring_expression(&words), previous) {
                pairs.push(CandidatePair {
                    referent,
                    anaphora: mention,
                });
            }
            previous = Some(mention);
        }
    }

    pairs
}
