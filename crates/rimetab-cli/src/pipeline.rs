use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use rimetab_data::{load_corpus, load_rule_table};

use crate::classify::aggregate;
use crate::report;

/// Run the whole batch: parse the corpus, load the rule table, fold the
/// entries into a tally, and emit the report.
///
/// Stages run once, in order, and each input is read and closed before the
/// next stage starts. Any failure aborts the run before the output file is
/// created; a partial report is never left behind.
pub fn run(corpus: &Path, table: &Path, output: &Path) -> Result<()> {
    let start = Instant::now();

    let entries = load_corpus(corpus)
        .with_context(|| format!("loading corpus from {}", corpus.display()))?;
    let rules = load_rule_table(table)
        .with_context(|| format!("loading rule table from {}", table.display()))?;
    let tally = aggregate(&entries, &rules).context("classifying corpus")?;
    report::write(&tally, output)
        .with_context(|| format!("writing report to {}", output.display()))?;

    info!(
        "report written to {} in {} ms ({} entries, {} categories)",
        output.display(),
        start.elapsed().as_millis(),
        entries.len(),
        tally.len()
    );
    Ok(())
}
