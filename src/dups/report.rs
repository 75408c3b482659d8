use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::Duplicate;

/// Write one `[<count>] <name>` line per duplicate.
pub fn render_report<W: Write>(out: &mut W, duplicates: &[Duplicate]) -> io::Result<()> {
    for dup in duplicates {
        writeln!(out, "[{}] {}", dup.count, dup.name)?;
    }
    Ok(())
}

/// Create or truncate `path` and write the report into it.
///
/// The file is created even when `duplicates` is empty.
pub fn write_report(path: &Path, duplicates: &[Duplicate]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    render_report(&mut out, duplicates)?;
    out.flush()
}
