use anaphor_protocol::MentionId;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::corpus::DocumentResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub source: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscardedPair {
    pub document: String,
    pub referent: MentionId,
    pub anaphora: MentionId,
    pub reason: String,
}

/// Summary of one corpus run, written with `--report`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub documents: usize,
    pub pairs: usize,
    pub anomalies: usize,
    pub skipped: Vec<SkippedDocument>,
    pub discarded: Vec<DiscardedPair>,
}

impl RunReport {
    pub fn from_results(results: &[DocumentResult]) -> Self {
        let mut report = RunReport::default();

        for result in results {
            match &result.outcome {
                Ok(pairs) => {
                    report.documents += 1;
                    report.pairs += pairs.records.len();
                    report.anomalies += pairs.anomalies;
                    report
                        .discarded
                        .extend(pairs.discarded.iter().map(|d| DiscardedPair {
                            document: pairs.document.clone(),
                            referent: d.referent,
                            anaphora: d.anaphora,
                            reason: d.error.to_string(),
                        }));
                }
                Err(err) => report.skipped.push(SkippedDocument {
                    source: result.source.display().to_string(),
                    error: format!("{err:#}"),
                }),
            }
        }

        report
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "{} document(s), {} pair(s), {} discarded, {} skipped, {} anomalies",
            self.documents,
            self.pairs,
            self.discarded.len(),
            self.skipped.len(),
            self.anomalies
        )
    }
}
