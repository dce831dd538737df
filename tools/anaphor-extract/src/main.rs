use anaphor_conllu::ReaderOptions;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

mod corpus;
mod output;
mod report;

use crate::corpus::ExtractOptions;
use crate::report::RunReport;

#[derive(Parser)]
#[command(author, version, about = "Extracts anaphoric pair features from CoNLL-U coreference data")]
struct Cli {
    /// A .conllu file, or a directory of them
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Pair table (tab-separated)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Worker threads; defaults to one per core
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Entity attribute order, e.g. `eid-etype-head-other`
    #[arg(long, value_name = "LAYOUT")]
    entity_layout: Option<String>,

    /// Write a JSON run report
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Write all records as an rkyv archive
    #[arg(long, value_name = "FILE")]
    archive: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("configuring worker threads")?;
    }

    let files = corpus::discover(&cli.input)?;
    log::info!("Reading {} document(s) from {:?}", files.len(), cli.input);

    let options = ExtractOptions {
        reader: ReaderOptions {
            entity_layout: cli.entity_layout,
        },
        quiet: cli.quiet,
    };
    let results = corpus::run(&files, &options);

    let report = RunReport::from_results(&results);
    let records = output::write_table(&cli.output, &results)?;
    log::info!("Wrote {} pair(s) to {:?}", records, cli.output);

    if let Some(path) = &cli.archive {
        let archived = output::write_archive(path, &results)?;
        log::info!("Archived {} pair(s) to {:?}", archived, path);
    }

    if let Some(path) = &cli.report {
        report.write(path)?;
    }

    eprintln!("{}", report.summary());
    Ok(())
}
