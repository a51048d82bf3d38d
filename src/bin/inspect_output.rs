// src/bin/inspect_output.rs

use anyhow::{Context, Result};
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::{env, fs::File, path::Path, process::exit};

fn main() {
    // Expect exactly one CLI argument: path to a Parquet output file.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <PARQUET_FILE>", args[0]);
        exit(1);
    }
    if let Err(e) = inspect(Path::new(&args[1])) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

/// Open the Parquet file and print its schema, row count, and rows.
fn inspect(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("`{}` is not a readable Parquet file", path.display()))?;

    println!("=== Parquet File: {} ===", path.display());
    println!("=== Schema ===");
    for field in builder.schema().fields() {
        println!("- {}: {:?}", field.name(), field.data_type());
    }
    println!();

    let reader = builder
        .build()
        .context("building RecordBatch reader")?;
    let batches: Vec<_> = reader
        .collect::<std::result::Result<_, _>>()
        .context("reading record batches")?;

    let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    println!("Total rows: {}", total_rows);
    println!(
        "{}",
        pretty_format_batches(&batches).context("formatting batches")?
    );

    Ok(())
}
