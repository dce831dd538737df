//! Pair selection and feature measurement over a read document.
//!
//! The engine runs in three passes: locate clause boundaries, select
//! (referent, anaphora) pairs cluster by cluster, then measure each pair.

pub mod clause;
pub mod distance;
pub mod error;
pub mod extract;
pub mod select;

#[cfg(test)]
mod fixtures;

pub use crate::clause::ClauseBoundaries;
pub use crate::distance::{clause_distance, competitor_counts, measure, word_distance};
pub use crate::error::PairError;
pub use crate::extract::{extract_document, DocumentPairs, PairDiagnostic};
pub use crate::select::{select_pairs, CandidatePair};
