use anaphor_protocol::{
    CompetitorCounts, Document, Mention, Offset, PairRecord, Position, Token,
};
use anaphor_roles::{classify_case, humanness, pronominality};

use crate::clause::ClauseBoundaries;
use crate::error::PairError;
use crate::select::CandidatePair;

fn head<'d>(doc: &'d Document, mention: &Mention) -> Result<(&'d Token, Position), PairError> {
    let token = doc
        .mention_head(mention)
        .ok_or(PairError::UnresolvedHead(mention.id))?;
    let position = token
        .position()
        .ok_or(PairError::UnresolvedHead(mention.id))?;
    Ok((token, position))
}

/// Signed distance between the two heads. Not clamped: a negative value
/// means the annotation put the anaphor before its referent.
pub fn word_distance(referent_head: Position, anaphora_head: Position) -> Offset {
    anaphora_head - referent_head
}

pub fn clause_distance(
    boundaries: &ClauseBoundaries,
    referent_head: Position,
    anaphora_head: Position,
) -> u32 {
    boundaries.count_between(referent_head, anaphora_head) as u32
}

/// Buckets every mention of the document lying strictly between the two
/// heads by its case and humanness.
///
/// Every mention must have words and every competitor a head; otherwise
/// the pair cannot be measured.
pub fn competitor_counts(
    doc: &Document,
    referent_head: Position,
    anaphora_head: Position,
) -> Result<CompetitorCounts, PairError> {
    let mut counts = CompetitorCounts::default();

    for mention in doc.mentions() {
        let (first, last) = doc
            .mention_bounds(mention)
            .ok_or(PairError::EmptySpan(mention.id))?;

        if last < anaphora_head && first > referent_head {
            let (token, _) = head(doc, mention)?;
            counts.increment(classify_case(&token.deprel), humanness(mention.entity_type));
        }
    }

    Ok(counts)
}

fn surface(doc: &Document, mention: &Mention) -> String {
    doc.mention_words(mention)
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Computes every feature of one pair.
pub fn measure(
    doc: &Document,
    boundaries: &ClauseBoundaries,
    pair: &CandidatePair<'_>,
) -> Result<PairRecord, PairError> {
    let (referent_head, low) = head(doc, pair.referent)?;
    let (anaphora_head, high) = head(doc, pair.anaphora)?;
    let competitors = competitor_counts(doc, low, high)?;

    Ok(PairRecord {
        referent: surface(doc, pair.referent),
        anaphora: surface(doc, pair.anaphora),
        case: classify_case(&referent_head.deprel),
        humanness: humanness(pair.referent.entity_type),
        pronominality: pronominality(&anaphora_head.xpos),
        word_distance: word_distance(low, high),
        clause_distance: clause_distance(boundaries, low, high),
        competitors,
    })
}
