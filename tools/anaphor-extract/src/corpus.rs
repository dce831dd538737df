use anaphor_conllu::{Reader, ReaderOptions};
use anaphor_pairs::{extract_document, DocumentPairs};
use anyhow::{bail, Context};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the files picked up from a directory.
pub const EXTENSION: &str = "conllu";

/// Settings for one corpus run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub reader: ReaderOptions,
    pub quiet: bool,
}

/// What happened to one input file.
#[derive(Debug)]
pub struct DocumentResult {
    pub source: PathBuf,
    pub outcome: anyhow::Result<DocumentPairs>,
}

/// Lists the documents to process: the file itself, or every `.conllu`
/// directly inside a directory, sorted by name.
pub fn discover(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let entries =
        fs::read_dir(input).with_context(|| format!("reading directory {}", input.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        bail!("no .{EXTENSION} files in {}", input.display());
    }
    Ok(files)
}

fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn process(reader: &Reader, path: &Path) -> anyhow::Result<DocumentPairs> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = reader
        .read(&document_name(path), &text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(extract_document(&doc))
}

fn progress_bar(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}

/// Processes every file in parallel. Results come back in input order.
pub fn run(files: &[PathBuf], options: &ExtractOptions) -> Vec<DocumentResult> {
    let reader = Reader::new(options.reader.clone());
    let bar = progress_bar(files.len(), options.quiet);

    let results: Vec<DocumentResult> = files
        .par_iter()
        .map(|path| {
            let outcome = process(&reader, path);
            if let Err(err) = &outcome {
                log::warn!("Skipping {}: {err:#}", path.display());
            }
            bar.inc(1);
            DocumentResult {
                source: path.clone(),
                outcome,
            }
        })
        .collect();

    bar.finish_and_clear();
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
# newdoc id = sample
# global.Entity = eid-etype-head-other
1\tKim\tKim\tPROPN\tNNP\t_\t2\tnsubj\t_\tEntity=(e1-person-1)
2\tsaw\tsee\tVERB\tVBD\t_\t0\troot\t_\t_
3\tthe\tthe\tDET\tDT\t_\t4\tdet\t_\tEntity=(e2-object-2
4\tdog\tdog\tNOUN\tNN\t_\t2\tobj\t_\tEntity=e2)
5\tand\tand\tCCONJ\tCC\t_\t6\tcc\t_\t_
6\tpetted\tpet\tVERB\tVBD\t_\t2\tconj\t_\t_
7\tit\tit\tPRON\tPRP\t_\t6\tobj\t_\tEntity=(e2-object-1)
";

    #[test]
    fn test_discover_sorts_and_filters() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.conllu"), SAMPLE).unwrap();
        fs::write(dir.path().join("a.conllu"), SAMPLE).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.conllu")).unwrap();

        let files = discover(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.conllu", "b.conllu"]);
    }

    #[test]
    fn test_discover_single_file_and_empty_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("only.conllu");
        fs::write(&file, SAMPLE).unwrap();
        assert_eq!(discover(&file).unwrap(), vec![file.clone()]);

        let empty = tempdir().unwrap();
        assert!(discover(empty.path()).is_err());
    }

    #[test]
    fn test_run_keeps_order_and_skips_broken_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.conllu"), SAMPLE).unwrap();
        fs::write(dir.path().join("b.conllu"), "1\tonly three\tcolumns\n").unwrap();
        fs::write(dir.path().join("c.conllu"), SAMPLE).unwrap();

        let files = discover(dir.path()).unwrap();
        let options = ExtractOptions {
            quiet: true,
            ..ExtractOptions::default()
        };
        let results = run(&files, &options);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].source, files[0]);
        assert!(results[1].outcome.is_err());

        let first = results[0].outcome.as_ref().unwrap();
        assert_eq!(first.document, "a");
        assert_eq!(first.records.len(), 1);
        assert_eq!(first.records[0].anaphora, "it");
        assert_eq!(results[2].outcome.as_ref().unwrap().document, "c");
    }
}
