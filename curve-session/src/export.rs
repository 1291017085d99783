//! CSV export of session curves

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CurveError, CurveResult};
use crate::session::{CurvePoint, MaterialEntry};

pub const CSV_FILE_NAME: &str = "stress_strain_data.csv";
pub const CSV_MIME: &str = "text/csv";
pub const CSV_HEADER: &str = "Material,Strain,Stress";

/// File name used by the single-curve export of the first form layout
pub const SINGLE_CURVE_FILE_NAME: &str = "curva_plastica.csv";

/// Destination for an exported file: a browser download, a directory, ...
pub trait DownloadSink {
    fn deliver(&mut self, file_name: &str, mime: &str, contents: &str) -> CurveResult<()>;
}

/// One row per (entry, point), entry order then point order. No trailing newline.
pub fn to_csv<'a, I>(entries: I) -> CurveResult<String>
where
    I: IntoIterator<Item = &'a MaterialEntry>,
{
    let mut entries = entries.into_iter().peekable();
    if entries.peek().is_none() {
        return Err(CurveError::NoData);
    }

    let mut lines = vec![CSV_HEADER.to_string()];
    for entry in entries {
        let name = escape_csv(&entry.name);
        lines.extend(
            entry
                .data
                .iter()
                .map(|p| format!("{},{},{}", name, p.strain, p.stress)),
        );
    }
    Ok(lines.join("\n"))
}

/// `Strain,Stress` export of a single curve
pub fn to_single_curve_csv(points: &[CurvePoint]) -> CurveResult<String> {
    if points.is_empty() {
        return Err(CurveError::NoData);
    }
    let mut lines = vec!["Strain,Stress".to_string()];
    lines.extend(points.iter().map(|p| format!("{},{}", p.strain, p.stress)));
    Ok(lines.join("\n"))
}

/// Build the CSV and hand it to `sink` as `file_name`
/// (normally [`CSV_FILE_NAME`], see `CurveConfig::csv_file_name`)
pub fn export_csv<'a, I>(entries: I, file_name: &str, sink: &mut impl DownloadSink) -> CurveResult<()>
where
    I: IntoIterator<Item = &'a MaterialEntry>,
{
    let csv = to_csv(entries)?;
    tracing::info!("Exporting {} CSV lines to {}", csv.lines().count(), file_name);
    sink.deliver(file_name, CSV_MIME, &csv)
}

/// Hand a single curve to `sink` as `curva_plastica.csv`
pub fn export_single_curve(points: &[CurvePoint], sink: &mut impl DownloadSink) -> CurveResult<()> {
    let csv = to_single_curve_csv(points)?;
    tracing::info!("Exporting {} points to {}", points.len(), SINGLE_CURVE_FILE_NAME);
    sink.deliver(SINGLE_CURVE_FILE_NAME, CSV_MIME, &csv)
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Writes exports into a directory on disk
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, oldest first
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DownloadSink for FileSink {
    fn deliver(&mut self, file_name: &str, _mime: &str, contents: &str) -> CurveResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, contents)?;
        tracing::info!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
