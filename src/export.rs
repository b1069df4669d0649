use crate::error::ExportError;
use crate::results::{COLUMN_HEADERS, RecordTable};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File format written by [`export`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Office Open XML workbook with one sheet
    Xlsx,
    /// Comma separated values, UTF-8
    Csv,
}

impl ExportFormat {
    /// Determines the format from the file extension; anything but `.csv` is a workbook
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Xlsx,
        }
    }
}

/// Writes `table` to `path`, replacing any existing file, and returns the path
///
/// The content is written to a temporary file next to `path` and renamed over
/// it, so readers see either the previous file or the complete new one. An
/// empty table produces a file with only the header row.
pub fn export(table: &RecordTable, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path);
    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;

    match format {
        ExportFormat::Csv => write_csv(table, &mut tmp)?,
        ExportFormat::Xlsx => write_xlsx(table, tmp.path())?,
    }

    if let Some(permissions) = target_permissions(path) {
        tmp.as_file().set_permissions(permissions).map_err(io_err)?;
    }
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    ::log::info!(
        "Exported {} records to {} ({:?})",
        table.len(),
        path.display(),
        format
    );
    Ok(path.to_path_buf())
}

/// Mode the exported file should end up with
///
/// Temporary files are created owner-only, so the replaced file's mode is
/// carried over, and a new file gets the usual `0o644`.
fn target_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(metadata) = fs::metadata(path) {
        return Some(metadata.permissions());
    }
    default_permissions()
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

fn write_csv<W: Write>(table: &RecordTable, out: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;
    for record in table {
        writer.write_record(record.cells())?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn write_xlsx(table: &RecordTable, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();

    // A fixed creation time keeps repeated exports byte-identical
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();
    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (i, record) in table.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, cell) in record.cells().iter().enumerate() {
            worksheet.write_string(row, col as u16, cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
