use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::grammar::{GrammaticalCase, Humanness, Pronominality};
use crate::position::Offset;

/// Column names of the pair table, in output order.
pub const HEADER: [&str; 17] = [
    "referent",
    "anaphora",
    "case",
    "humanness",
    "pronominality",
    "word_d",
    "clause_d",
    "nomp",
    "accp",
    "oblp",
    "genp",
    "othp",
    "nomn",
    "accn",
    "obln",
    "genn",
    "othn",
];

/// The header row, tab-separated.
pub fn header_row() -> String {
    HEADER.join("\t")
}

/// Competitor histogram: one counter per case × humanness bucket.
///
/// Slots are ordered human first (nom, acc, obl, gen, other), then
/// non-human in the same case order, matching the table columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CompetitorCounts([u32; 10]);

impl CompetitorCounts {
    const fn slot(case: GrammaticalCase, humanness: Humanness) -> usize {
        humanness as usize * GrammaticalCase::ALL.len() + case as usize
    }

    pub fn increment(&mut self, case: GrammaticalCase, humanness: Humanness) {
        self.0[Self::slot(case, humanness)] += 1;
    }

    pub fn get(&self, case: GrammaticalCase, humanness: Humanness) -> u32 {
        self.0[Self::slot(case, humanness)]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Counters in column order.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// Features of one (referent, anaphora) pair, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct PairRecord {
    pub referent: String,
    pub anaphora: String,
    pub case: GrammaticalCase,
    pub humanness: Humanness,
    pub pronominality: Pronominality,
    pub word_distance: Offset,
    pub clause_distance: u32,
    pub competitors: CompetitorCounts,
}

impl PairRecord {
    /// One tab-separated table row, without a line terminator.
    pub fn to_row(&self) -> String {
        let mut fields: Vec<String> = Vec::with_capacity(HEADER.len());
        fields.push(self.referent.clone());
        fields.push(self.anaphora.clone());
        fields.push(self.case.as_str().to_string());
        fields.push(self.humanness.as_str().to_string());
        fields.push(self.pronominality.as_str().to_string());
        fields.push(format!("{}", self.word_distance));
        fields.push(format!("{}", self.clause_distance));
        fields.extend(self.competitors.as_slice().iter().map(|c| format!("{c}")));
        fields.join("\t")
    }
}
