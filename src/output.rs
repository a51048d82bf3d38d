// src/output.rs

use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Output files are keyed by month: "output_<month>.parquet".
pub fn output_file_name(month: i64) -> String {
    format!("output_{}.parquet", month)
}

/// Write `batch` to `path` as Parquet.
///
/// The batch goes to a sibling `.tmp` file first and is renamed into place
/// once the writer has closed, so a failure never leaves a truncated file
/// at `path`. An existing file at `path` is overwritten.
pub fn write_batch(batch: &RecordBatch, path: &Path) -> Result<PathBuf> {
    let tmp_path = path.with_extension("tmp");

    let file = File::create(&tmp_path)
        .with_context(|| format!("could not create temporary file `{}`", tmp_path.display()))?;
    let mut writer = ArrowWriter::try_new(BufWriter::new(file), batch.schema(), None)
        .context("creating ArrowWriter for output Parquet")?;
    writer
        .write(batch)
        .with_context(|| format!("writing batch to `{}`", tmp_path.display()))?;
    writer
        .close()
        .context("closing ArrowWriter for output Parquet")?;

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to rename `{}` to `{}`",
            tmp_path.display(),
            path.display()
        )
    })?;

    debug!(path = %path.display(), rows = batch.num_rows(), "wrote parquet");
    Ok(path.to_path_buf())
}
