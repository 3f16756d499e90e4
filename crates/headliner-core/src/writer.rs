//! Output file: one heading per line, written through a temp file and renamed into place.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ScrapeError;

/// Temporary file suffix used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `headlines.txt` → `headlines.txt.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Overwrite `path` with `headlines`, each followed by `\n`, and return its absolute path.
pub fn write_headlines(path: &Path, headlines: &[String]) -> Result<PathBuf, ScrapeError> {
    let tmp = temp_path(path);
    if let Err(e) = write_lines(&tmp, headlines) {
        let _ = fs::remove_file(&tmp);
        return Err(ScrapeError::io(path, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ScrapeError::io(path, e));
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::debug!(path = %absolute.display(), lines = headlines.len(), "wrote headlines");
    Ok(absolute)
}

fn write_lines(tmp: &Path, headlines: &[String]) -> std::io::Result<()> {
    let file = File::create(tmp)?;
    let mut out = BufWriter::new(file);
    for line in headlines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.into_inner().map_err(|e| e.into_error())?.sync_all()
}

/// Read a headlines file back into its lines.
pub fn read_headlines(path: &Path) -> Result<Vec<String>, ScrapeError> {
    let data = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
    Ok(data.lines().map(str::to_string).collect())
}
