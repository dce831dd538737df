use anaphor_protocol::{ClauseRelations, Document, Position};

/// Positions where a clause starts: every sentence's first word plus every
/// word attached by a clause-introducing relation.
///
/// Kept sorted and deduplicated, so counting is a pair of binary searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseBoundaries {
    positions: Vec<Position>,
}

impl ClauseBoundaries {
    pub fn locate(doc: &Document) -> Self {
        Self::locate_with(doc, ClauseRelations::default())
    }

    pub fn locate_with(doc: &Document, relations: ClauseRelations) -> Self {
        let mut positions = Vec::new();

        for sentence in doc.sentences() {
            if let Some(start) = sentence.first_word().and_then(|t| t.position()) {
                positions.push(start);
            }
            positions.extend(
                sentence
                    .words()
                    .filter(|t| relations.matches(&t.deprel))
                    .filter_map(|t| t.position()),
            );
        }

        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }

    /// Boundaries strictly inside `(low, high)`. Zero when `low >= high`.
    pub fn count_between(&self, low: Position, high: Position) -> usize {
        let above_low = self.positions.partition_point(|p| *p <= low);
        let below_high = self.positions.partition_point(|p| *p < high);
        below_high.saturating_sub(above_low)
    }

    /// Number of distinct boundary positions in the document.
    pub fn distinct_len(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}
