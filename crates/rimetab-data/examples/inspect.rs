use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rimetab_data::load_rule_table;
use rimetab_types::{ToneClass, tone_label_columns};

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p rimetab-data --example inspect -- <table.csv>")?;

    let table = load_rule_table(&path)
        .with_context(|| format!("loading rule table from {}", path.display()))?;

    let mut per_column: BTreeMap<usize, usize> = BTreeMap::new();
    for (_, pos) in table.mapped_chars() {
        *per_column.entry(pos.col).or_insert(0) += 1;
    }

    println!("Rule table : {}", path.display());
    println!("Rows       : {}", table.row_count());
    println!("Characters : {}", table.char_count());
    for (col, count) in &per_column {
        match ToneClass::from_slot(*col) {
            Some(class) => println!("  column {col} ({class}): {count}"),
            None => println!("  column {col} (no tone slot): {count}"),
        }
    }
    println!("Report columns: {}", tone_label_columns().join(" "));

    // Spot-check a few fragments to confirm row order.
    for row in 0..table.row_count().min(3) {
        println!("Row {row} fragment: {:?}", table.fragment(row).unwrap_or(""));
    }

    Ok(())
}
