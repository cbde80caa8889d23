use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::WriterBuilder;
use tracing::info;

use crate::error::Result;
use crate::models::FlatBrandRecord;

/// Output filename for a run on the given day.
pub fn output_filename(date: NaiveDate) -> String {
    format!("brands_shopee_{}.csv", date.format("%Y%m%d"))
}

pub struct CsvWriter {
    output_dir: PathBuf,
}

impl CsvWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Write every accumulated record, in order, as one comma-delimited
    /// file. The header row comes from the record's field names; with zero
    /// records the file is created empty. Errors here are fatal to the run.
    pub fn write(&self, filename: &str, records: &[FlatBrandRecord]) -> Result<PathBuf> {
        let path = self.output_dir.join(filename);
        let file = File::create(&path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(true)
            .from_writer(BufWriter::new(file));

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!(
            path = %path.display(),
            records = records.len(),
            "Wrote output file"
        );

        Ok(path)
    }
}
