use anaphor_protocol::{header_row, PairRecord};
use anyhow::{anyhow, Context};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::{Archive, Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::corpus::DocumentResult;

/// One document's records as stored in the binary archive.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[archive(check_bytes)]
pub struct DocumentRecords {
    pub document: String,
    pub records: Vec<PairRecord>,
}

/// Writes the header and every record, document by document.
/// Returns the number of rows written.
pub fn write_table(path: &Path, results: &[DocumentResult]) -> anyhow::Result<usize> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", header_row())?;

    let mut rows = 0;
    for pairs in results.iter().filter_map(|r| r.outcome.as_ref().ok()) {
        for record in &pairs.records {
            writeln!(out, "{}", record.to_row())?;
            rows += 1;
        }
    }

    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(rows)
}

/// Serializes the records of every successful document with rkyv.
/// Returns the number of records archived.
pub fn write_archive(path: &Path, results: &[DocumentResult]) -> anyhow::Result<usize> {
    let documents: Vec<DocumentRecords> = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok())
        .map(|pairs| DocumentRecords {
            document: pairs.document.clone(),
            records: pairs.records.clone(),
        })
        .collect();
    let count = documents.iter().map(|d| d.records.len()).sum();

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&documents)
        .map_err(|err| anyhow!("serializing records: {err:?}"))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(count)
}
