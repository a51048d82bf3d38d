// src/pipeline.rs

use anyhow::{anyhow, Context, Result};
use arrow::util::pretty::pretty_format_batches;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::output::{output_file_name, write_batch};
use crate::table::{build_batch, sample_rows, with_month};

/// Every run stamps this month onto the table. The output filename is
/// derived from it as well, not from the requested day.
pub const MONTH: i64 = 2;

/// Pull the day selector out of the raw argument list.
///
/// No range validation: any integer passes, anything else is an error.
pub fn parse_day(args: &[String]) -> Result<i64> {
    let raw = args.get(1).ok_or_else(|| anyhow!("missing day argument"))?;
    raw.parse()
        .with_context(|| format!("day argument `{}` is not an integer", raw))
}

/// Run the pipeline once: build the sample table, stamp the month column,
/// print a preview, and write the Parquet extract into `out_dir`.
/// Returns the path of the written file.
#[instrument(level = "info", skip(out_dir))]
pub fn run(day: i64, out_dir: &Path) -> Result<PathBuf> {
    info!("running pipeline for day {}", day);

    let batch = build_batch(&sample_rows())?;
    // `day` selects the run; the month column and output name both come
    // from MONTH.
    let annotated = with_month(&batch, MONTH)?;

    println!(
        "{}",
        pretty_format_batches(&[annotated.clone()]).context("formatting table preview")?
    );

    let out_path = out_dir.join(output_file_name(MONTH));
    write_batch(&annotated, &out_path)?;
    info!(path = %out_path.display(), rows = annotated.num_rows(), "pipeline complete");

    Ok(out_path)
}
