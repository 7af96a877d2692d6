//! Zip archive construction from the selected file sequence

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::BuildError;
use crate::report::Reporter;
use crate::select::SelectedFile;

/// Write the selected files into a fresh zip archive at `output`.
///
/// Any pre-existing artifact at the output path is deleted first; there are
/// no incremental semantics across runs. Each selected file becomes exactly
/// one deflate-compressed entry named by its normalized member path. The
/// archive is finished and flushed before the returned size is read.
///
/// A selected file that cannot be read at write time is fatal and names the
/// file; whatever was already written may remain at the output path.
pub fn write_archive<W: Write>(
    output: &Path,
    selected: &[SelectedFile],
    reporter: &mut Reporter<W>,
) -> Result<u64, BuildError> {
    if output.exists() {
        fs::remove_file(output).map_err(|e| {
            BuildError::config(format!(
                "cannot remove existing artifact {}: {e}",
                output.display()
            ))
        })?;
        reporter.removed_stale(output);
    }

    let sink = File::create(output).map_err(|e| {
        BuildError::config(format!("cannot create archive {}: {e}", output.display()))
    })?;

    let mut archive = ZipWriter::new(sink);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in selected {
        archive
            .start_file(file.member_path.as_str(), options)
            .map_err(|e| BuildError::write(output, format!("cannot start entry: {e}")))?;

        let mut source = File::open(&file.source)
            .map_err(|e| BuildError::write(&file.source, format!("cannot read selected file: {e}")))?;

        io::copy(&mut source, &mut archive)
            .map_err(|e| BuildError::write(&file.source, format!("cannot copy into archive: {e}")))?;

        reporter.file_added(&file.member_path);
    }

    let mut sink = archive
        .finish()
        .map_err(|e| BuildError::write(output, format!("cannot finish archive: {e}")))?;
    sink.flush()
        .map_err(|e| BuildError::write(output, format!("cannot flush archive: {e}")))?;
    drop(sink);

    let meta = fs::metadata(output)
        .map_err(|e| BuildError::write(output, format!("cannot stat archive: {e}")))?;
    Ok(meta.len())
}
