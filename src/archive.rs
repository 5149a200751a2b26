use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Outcome of an archiving pass.
pub struct Report {
    /// Entry names written to the archive, in archive order.
    pub entries: Vec<String>,

    /// Configured paths that did not exist at archiving time, in list order.
    /// Missing inputs are informational, not errors.
    pub missing: Vec<PathBuf>,
}

/// Create `output` (truncating any previous archive of the same name) and
/// write the existing subset of `files` into it, each entry stored
/// deflate-compressed under its base name with all directory components
/// stripped.
pub fn create(ctx: &Context, files: &[PathBuf], output: &Path) -> Result<Report> {
    let file = File::create(output)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let (existing, missing): (Vec<&PathBuf>, Vec<&PathBuf>) =
        files.iter().partition(|path| path.exists());

    let mut entries = Vec::new();
    for (i, path) in existing.iter().enumerate() {
        // The writer refuses duplicate entry names, so when two inputs share
        // a base name only the last occurrence in list order is written.
        if existing[i + 1..]
            .iter()
            .any(|later| later.file_name() == path.file_name())
        {
            continue;
        }

        let name = base_name(path)?;
        if ctx.verbose {
            println!("Adding {} as {}", path.display(), name);
        }

        zip.start_file(name.as_str(), options)?;
        let mut f = File::open(path)?;
        let mut buffer = Vec::new();
        f.read_to_end(&mut buffer)?;
        zip.write_all(&buffer)?;
        entries.push(name);
    }

    zip.finish()?;

    Ok(Report {
        entries,
        missing: missing.into_iter().cloned().collect(),
    })
}

fn base_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| Error::custom(format!("{} has no file name", path.display())))
}
