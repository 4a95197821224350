use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};

use evidence_core::TableSpec;

/// Size and digest of a written CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOutput {
    pub bytes_written: u64,
    pub sha256: String,
}

/// Write a table as CSV: header from `spec`, then one record per row.
///
/// The row type must serialize its fields in `spec.columns` order.
pub fn write_table_csv<T: Serialize>(
    path: &Path,
    spec: &TableSpec,
    rows: &[T],
) -> Result<CsvOutput, csv::Error> {
    let file = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(DigestWriter::new(file));

    writer.write_record(spec.columns)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    let mut digest = writer.into_inner().map_err(|err| err.into_error())?;
    digest.flush()?;
    Ok(digest.finish())
}

/// Counts and hashes bytes on their way to the inner writer.
struct DigestWriter<W: Write> {
    inner: W,
    bytes: u64,
    hasher: Sha256,
}

impl<W: Write> DigestWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes: 0,
            hasher: Sha256::new(),
        }
    }

    fn finish(self) -> CsvOutput {
        CsvOutput {
            bytes_written: self.bytes,
            sha256: hex::encode(self.hasher.finalize()),
        }
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.hasher.update(&buf[..size]);
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
